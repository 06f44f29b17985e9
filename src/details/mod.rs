pub mod contact;
pub mod gallery;

pub use contact::{ContactLinks, ContactMessage};
pub use gallery::Gallery;

use crate::models::{Listing, Review};

/// Reviews written for one property, in dataset order
pub fn reviews_for<'a>(reviews: &'a [Review], property_id: &str) -> Vec<&'a Review> {
    reviews
        .iter()
        .filter(|review| review.property_id == property_id)
        .collect()
}

/// Mean star rating, or `None` when nobody has reviewed yet
pub fn average_rating(reviews: &[&Review]) -> Option<f64> {
    if reviews.is_empty() {
        return None;
    }
    let total: u32 = reviews.iter().map(|review| u32::from(review.rating)).sum();
    Some(f64::from(total) / reviews.len() as f64)
}

/// Text offered to the platform share sheet
pub fn share_text(listing: &Listing) -> String {
    format!("Check out this property: {}", listing.details.title)
}

/// Price with Turkish number formatting: dot thousands separators and up to
/// three decimals after a comma, e.g. "15.000 TL" or "12.500,5 TL"
pub fn format_price_try(price: f64) -> String {
    let fixed = format!("{:.3}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    if !fraction.is_empty() {
        grouped.push(',');
        grouped.push_str(fraction);
    }

    let negative = price < 0.0 && (whole != "0" || !fraction.is_empty());
    if negative {
        format!("-{} TL", grouped)
    } else {
        format!("{} TL", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{seed_listings, seed_reviews};
    use chrono::Utc;

    #[test]
    fn reviews_are_matched_by_property_id() {
        let reviews = seed_reviews();
        let first = reviews_for(&reviews, "1");
        assert_eq!(first.len(), 2);
        assert!(first.iter().all(|r| r.property_id == "1"));
        assert!(reviews_for(&reviews, "unknown").is_empty());
    }

    #[test]
    fn average_rating_over_reviews() {
        let reviews = seed_reviews();
        assert_eq!(average_rating(&reviews_for(&reviews, "1")), Some(4.5));
        assert_eq!(average_rating(&[]), None);
    }

    #[test]
    fn share_text_names_the_listing() {
        let listing = &seed_listings(Utc::now())[2];
        assert_eq!(share_text(listing), "Check out this property: Luxury Villa with Pool");
    }

    #[test]
    fn prices_use_dot_grouping() {
        assert_eq!(format_price_try(15_000.0), "15.000 TL");
        assert_eq!(format_price_try(999.0), "999 TL");
        assert_eq!(format_price_try(0.0), "0 TL");
    }

    #[test]
    fn fractional_prices_keep_their_decimals() {
        assert_eq!(format_price_try(12_500.5), "12.500,5 TL");
        assert_eq!(format_price_try(999.6), "999,6 TL");
        assert_eq!(format_price_try(1_250_000.4), "1.250.000,4 TL");
        assert_eq!(format_price_try(7.125), "7,125 TL");
        assert_eq!(format_price_try(3.14159), "3,142 TL");
        assert_eq!(format_price_try(-1_500.25), "-1.500,25 TL");
    }
}
