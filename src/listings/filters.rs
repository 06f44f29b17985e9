use crate::listings::types::FilterCriteria;
use crate::models::Listing;

/// Whether a listing satisfies every constraint set in `criteria`
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let details = &listing.details;

    if let Some(city) = &criteria.city {
        if details.city != *city {
            return false;
        }
    }
    if let Some(neighborhood) = &criteria.neighborhood {
        if details.neighborhood != *neighborhood {
            return false;
        }
    }
    if let Some(property_type) = criteria.property_type {
        if details.property_type != property_type {
            return false;
        }
    }
    if let Some(range) = &criteria.price_range {
        if !range.contains(details.price) {
            return false;
        }
    }
    if let Some(room_type) = &criteria.room_type {
        if listing.room_type() != Some(room_type.as_str()) {
            return false;
        }
    }

    true
}

/// Keep the listings matching `criteria`, in their original order
pub fn filter_listings<'a, I>(listings: I, criteria: &FilterCriteria) -> Vec<&'a Listing>
where
    I: IntoIterator<Item = &'a Listing>,
{
    listings
        .into_iter()
        .filter(|listing| matches(listing, criteria))
        .collect()
}
