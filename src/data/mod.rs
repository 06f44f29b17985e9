use crate::listings::dates::add_months;
use crate::models::{Contact, GeoPoint, Listing, ListingDraft, PropertyType, Review};
use chrono::{DateTime, TimeZone, Utc};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Starter listings the board opens with, all created at `created_at`
pub fn seed_listings(created_at: DateTime<Utc>) -> Vec<Listing> {
    let drafts = vec![
        (
            "1",
            ListingDraft {
                title: "Modern Bosphorus View Apartment".to_string(),
                description: "Stunning apartment with panoramic Bosphorus views and modern amenities. Recently renovated with high-end finishes throughout.".to_string(),
                price: 15_000.0,
                city: "Istanbul".to_string(),
                neighborhood: "Besiktas".to_string(),
                bedrooms: 2,
                bathrooms: 2,
                area: 120.0,
                property_type: PropertyType::Apartment,
                room_type: Some("2+1".to_string()),
                furnished: true,
                pet_friendly: false,
                amenities: strings(&["WiFi", "Gym", "Parking", "Air Conditioning"]),
                features: strings(&["24/7 Security", "Elevator", "Built-in Kitchen", "Central Heating"]),
                image_url: "https://images.unsplash.com/photo-1522708323590-d24dbb6b0267".to_string(),
                images: vec![],
                video_url: None,
                location: GeoPoint { lat: 41.0422, lng: 29.0083 },
                contact: Contact {
                    name: "Ahmet Yilmaz".to_string(),
                    phone: "+90 532 555 1234".to_string(),
                    email: "ahmet.yilmaz@example.com".to_string(),
                    whatsapp: Some("905325551234".to_string()),
                },
            },
        ),
        (
            "2",
            ListingDraft {
                title: "Cozy Studio in Historic District".to_string(),
                description: "Charming studio in the heart of historic peninsula, perfect for young professionals or students.".to_string(),
                price: 8_000.0,
                city: "Istanbul".to_string(),
                neighborhood: "Beyoglu".to_string(),
                bedrooms: 1,
                bathrooms: 1,
                area: 55.0,
                property_type: PropertyType::Apartment,
                room_type: Some("1+0".to_string()),
                furnished: true,
                pet_friendly: true,
                amenities: strings(&["WiFi", "Security", "Furnished"]),
                features: strings(&["High-Speed Internet", "Modern Appliances"]),
                image_url: "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688".to_string(),
                images: vec![],
                video_url: None,
                location: GeoPoint { lat: 41.0359, lng: 28.9773 },
                contact: Contact {
                    name: "Zeynep Kaya".to_string(),
                    phone: "+90 533 555 5678".to_string(),
                    email: "zeynep.kaya@example.com".to_string(),
                    whatsapp: Some("905335555678".to_string()),
                },
            },
        ),
        (
            "3",
            ListingDraft {
                title: "Luxury Villa with Pool".to_string(),
                description: "Spectacular villa with private pool and garden, offering the perfect blend of luxury and comfort.".to_string(),
                price: 35_000.0,
                city: "Antalya".to_string(),
                neighborhood: "Konyaalti".to_string(),
                bedrooms: 4,
                bathrooms: 3,
                area: 280.0,
                property_type: PropertyType::House,
                room_type: Some("4+1".to_string()),
                furnished: false,
                pet_friendly: true,
                amenities: strings(&["Pool", "Garden", "Garage", "Smart Home"]),
                features: strings(&["Private Pool", "Garden", "Smart Home System", "Double Garage"]),
                image_url: "https://images.unsplash.com/photo-1512917774080-9991f1c4c750".to_string(),
                images: vec![],
                video_url: None,
                location: GeoPoint { lat: 36.8665, lng: 30.6333 },
                contact: Contact {
                    name: "Mehmet Demir".to_string(),
                    phone: "+90 535 555 9012".to_string(),
                    email: "mehmet.demir@example.com".to_string(),
                    whatsapp: Some("905355559012".to_string()),
                },
            },
        ),
    ];

    drafts
        .into_iter()
        .map(|(id, details)| Listing {
            id: id.to_string(),
            details,
            created_at,
            expires_at: add_months(created_at, 1),
            is_active: true,
        })
        .collect()
}

/// Reviews shown on the detail pages of the seed listings
pub fn seed_reviews() -> Vec<Review> {
    let review = |id: &str, property_id: &str, author: &str, rating: u8, comment: &str, (y, m, d): (i32, u32, u32)| Review {
        id: id.to_string(),
        property_id: property_id.to_string(),
        author: author.to_string(),
        rating,
        comment: comment.to_string(),
        date: Utc
            .with_ymd_and_hms(y, m, d, 12, 0, 0)
            .single()
            .unwrap_or_default(),
    };

    vec![
        review("1", "1", "Elif Sahin", 5, "Amazing view and a very responsive landlord.", (2024, 1, 10)),
        review("2", "1", "John Carter", 4, "Great location, a bit noisy on weekends.", (2024, 2, 3)),
        review("3", "2", "Maria Rossi", 4, "Small but cozy, everything within walking distance.", (2024, 1, 22)),
        review("4", "3", "Can Ozturk", 5, "The pool and garden were perfect for our family.", (2024, 3, 5)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_listings_expire_one_month_after_creation() {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        for listing in seed_listings(created) {
            assert_eq!(listing.created_at, created);
            assert_eq!(listing.expires_at, add_months(created, 1));
            assert!(listing.is_active);
        }
    }

    #[test]
    fn seed_ids_are_unique() {
        let listings = seed_listings(Utc::now());
        let ids: HashSet<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids.len(), listings.len());
    }

    #[test]
    fn every_review_points_at_a_seed_listing() {
        let listings = seed_listings(Utc::now());
        for review in seed_reviews() {
            assert!(listings.iter().any(|l| l.id == review.property_id));
            assert!((1..=5).contains(&review.rating));
        }
    }
}
