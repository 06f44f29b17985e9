use crate::error::ListingError;
use crate::models::PropertyType;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Named price bracket, written "min-max" (inclusive) or "min+" (open-ended)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

impl FromStr for PriceRange {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let invalid = || ListingError::InvalidPriceRange(s.to_string());
        let bound = |part: &str| -> Result<f64, ListingError> {
            part.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite() && *v >= 0.0)
                .ok_or_else(invalid)
        };

        if let Some(min) = token.strip_suffix('+') {
            return Ok(Self {
                min: bound(min)?,
                max: None,
            });
        }

        let (min, max) = token.split_once('-').ok_or_else(invalid)?;
        let (min, max) = (bound(min)?, bound(max)?);
        if min > max {
            return Err(invalid());
        }
        Ok(Self {
            min,
            max: Some(max),
        })
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}-{}", self.min, max),
            None => write!(f, "{}+", self.min),
        }
    }
}

/// Optional constraints narrowing the active view. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub property_type: Option<PropertyType>,
    pub price_range: Option<PriceRange>,
    pub room_type: Option<String>,
}

/// Query parameters written by the listings page
#[derive(Debug, Serialize)]
struct ListingsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Seed criteria from a listings URL query such as `?city=Istanbul`.
    /// Only the first `city` value counts. Anything missing or unreadable
    /// leaves the city unconstrained.
    pub fn from_query(query: &str) -> Self {
        let query = query.trim().trim_start_matches('?');
        let city = match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
            Ok(pairs) => pairs
                .into_iter()
                .find(|(key, _)| key == "city")
                .map(|(_, value)| value),
            Err(e) => {
                debug!("Ignoring malformed listings query '{}': {}", query, e);
                None
            }
        };

        Self {
            city: city.map(|c| c.trim().to_string()).filter(|c| !c.is_empty()),
            ..Self::default()
        }
    }

    /// Query string to navigate to for these criteria; empty without a city.
    pub fn to_query(&self) -> String {
        let query = ListingsQuery {
            city: self.city.clone(),
        };
        serde_urlencoded::to_string(&query).unwrap_or_default()
    }
}
