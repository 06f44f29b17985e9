use crate::error::{ListingError, Result};
use crate::models::{Contact, ListingDraft, PropertyType, DEFAULT_LOCATION};
use serde::{Deserialize, Serialize};

/// Raw values as submitted by the "list your property" form.
/// Numeric fields arrive as text and are coerced by [`ListingForm::into_draft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingForm {
    pub title: String,
    pub description: String,
    pub price: String,
    pub city: String,
    pub neighborhood: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub room_type: String,
    pub bathrooms: String,
    pub area: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub pet_friendly: bool,
    pub contact: ContactForm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub whatsapp: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: String::new(),
            city: String::new(),
            neighborhood: String::new(),
            property_type: PropertyType::Apartment,
            room_type: "1+0".to_string(),
            bathrooms: String::new(),
            area: String::new(),
            images: Vec::new(),
            video_url: String::new(),
            amenities: Vec::new(),
            features: Vec::new(),
            furnished: false,
            pet_friendly: false,
            contact: ContactForm {
                name: String::new(),
                phone: String::new(),
                email: String::new(),
                whatsapp: String::new(),
            },
        }
    }
}

fn invalid(field: &'static str, value: &str) -> ListingError {
    ListingError::InvalidDraft {
        field,
        value: value.to_string(),
    }
}

fn parse_positive(field: &'static str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or_else(|| invalid(field, value))
}

fn parse_count(field: &'static str, value: &str) -> Result<u32> {
    value.trim().parse::<u32>().map_err(|_| invalid(field, value))
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Bedroom count for a room-type token. Rooms use the whole token ("2"),
/// everything else the leading number of "N+M".
pub fn bedrooms_for(property_type: PropertyType, room_type: &str) -> Result<u32> {
    let token = room_type.trim();
    let rooms = match property_type {
        PropertyType::Room => token,
        PropertyType::Apartment | PropertyType::House => {
            token.split('+').next().unwrap_or_default()
        }
    };
    parse_count("roomType", rooms).map_err(|_| invalid("roomType", room_type))
}

impl ListingForm {
    /// Coerce the form into a typed draft, rejecting values that do not parse.
    pub fn into_draft(self) -> Result<ListingDraft> {
        let price = parse_positive("price", &self.price)?;
        let area = parse_positive("area", &self.area)?;
        let bathrooms = parse_count("bathrooms", &self.bathrooms)?;
        let bedrooms = bedrooms_for(self.property_type, &self.room_type)?;
        let image_url = self.images.first().cloned().unwrap_or_default();

        Ok(ListingDraft {
            title: self.title,
            description: self.description,
            price,
            city: self.city,
            neighborhood: self.neighborhood,
            bedrooms,
            bathrooms,
            area,
            property_type: self.property_type,
            room_type: Some(self.room_type.trim().to_string()),
            furnished: self.furnished,
            pet_friendly: self.pet_friendly,
            amenities: self.amenities,
            features: self.features,
            image_url,
            images: self.images,
            video_url: non_empty(self.video_url),
            location: DEFAULT_LOCATION,
            contact: Contact {
                name: self.contact.name,
                phone: self.contact.phone,
                email: self.contact.email,
                whatsapp: non_empty(self.contact.whatsapp),
            },
        })
    }
}
