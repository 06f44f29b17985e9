use crate::error::{ListingError, Result};
use crate::listings::dates::{add_months, is_expired, remaining_days};
use crate::listings::filters::filter_listings;
use crate::listings::form::ListingForm;
use crate::listings::traits::{Clock, SystemClock};
use crate::listings::types::FilterCriteria;
use crate::models::{Listing, ListingDraft, ListingStatus};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How long a listing stays up after creation or renewal
pub const LISTING_TERM_MONTHS: i32 = 1;

/// Owns every listing ever posted, newest first, and derives the views
/// the board shows. Expired listings are kept, only hidden.
pub struct ListingStore {
    listings: Vec<Listing>,
    clock: Arc<dyn Clock>,
}

impl ListingStore {
    /// Empty store on the given clock
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            listings: Vec::new(),
            clock,
        }
    }

    /// Store preloaded with `listings`. Each one is stamped active with a
    /// fresh term counted from its own creation time; duplicate ids are dropped.
    pub fn with_listings(clock: Arc<dyn Clock>, listings: Vec<Listing>) -> Self {
        let mut seen = HashSet::new();
        let listings = listings
            .into_iter()
            .filter(|listing| {
                let fresh = seen.insert(listing.id.clone());
                if !fresh {
                    warn!("Skipping duplicate listing id {}", listing.id);
                }
                fresh
            })
            .map(|listing| Listing {
                expires_at: add_months(listing.created_at, LISTING_TERM_MONTHS),
                is_active: true,
                ..listing
            })
            .collect::<Vec<_>>();

        debug!("Loaded {} listings", listings.len());
        Self { listings, clock }
    }

    pub fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Post a new listing at the front of the board
    pub fn create(&mut self, draft: ListingDraft) -> &Listing {
        let created_at = self.clock.now();
        let listing = Listing {
            id: Uuid::new_v4().to_string(),
            details: draft,
            created_at,
            expires_at: add_months(created_at, LISTING_TERM_MONTHS),
            is_active: true,
        };

        info!(
            "Created listing {} ({}), expires {}",
            listing.id, listing.details.title, listing.expires_at
        );
        self.listings.insert(0, listing);
        &self.listings[0]
    }

    /// Coerce a submitted form and post it
    pub fn create_from_form(&mut self, form: ListingForm) -> Result<&Listing> {
        let draft = form.into_draft().map_err(|e| {
            warn!("Rejected listing form: {}", e);
            e
        })?;
        Ok(self.create(draft))
    }

    /// Start a new term for a listing, counted from now, and reactivate it
    pub fn renew(&mut self, id: &str) -> Result<&Listing> {
        let now = self.clock.now();
        let listing = self
            .listings
            .iter_mut()
            .find(|listing| listing.id == id)
            .ok_or_else(|| ListingError::NotFound { id: id.to_string() })?;

        listing.expires_at = add_months(now, LISTING_TERM_MONTHS);
        listing.is_active = true;

        info!("Renewed listing {} until {}", listing.id, listing.expires_at);
        Ok(&*listing)
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Every listing, expired ones included, newest first
    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn is_visible(&self, listing: &Listing, now: chrono::DateTime<chrono::Utc>) -> bool {
        listing.is_active && !is_expired(listing.expires_at, now)
    }

    /// Listings currently on display, in board order. Evaluated lazily
    /// against the clock reading taken when the view is created.
    pub fn active_view(&self) -> impl Iterator<Item = &Listing> + '_ {
        let now = self.clock.now();
        self.listings
            .iter()
            .filter(move |listing| self.is_visible(listing, now))
    }

    /// Active listings narrowed by `criteria`
    pub fn filtered_view(&self, criteria: &FilterCriteria) -> Vec<&Listing> {
        let filtered = filter_listings(self.active_view(), criteria);
        debug!("Filter {:?} matched {} listings", criteria, filtered.len());
        filtered
    }

    pub fn status(&self, listing: &Listing) -> ListingStatus {
        if self.is_visible(listing, self.clock.now()) {
            ListingStatus::Active
        } else {
            ListingStatus::Expired
        }
    }

    /// Days left on a listing's current term, for the countdown badge
    pub fn remaining_days(&self, listing: &Listing) -> i64 {
        remaining_days(listing.expires_at, self.clock.now())
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::seed_listings;
    use crate::listings::traits::ManualClock;
    use crate::models::{Contact, PropertyType, DEFAULT_LOCATION};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 0, 0).unwrap()
    }

    fn draft(title: &str, city: &str) -> ListingDraft {
        ListingDraft {
            title: title.to_string(),
            description: "Bright and quiet".to_string(),
            price: 10_000.0,
            city: city.to_string(),
            neighborhood: "Center".to_string(),
            bedrooms: 2,
            bathrooms: 1,
            area: 90.0,
            property_type: PropertyType::Apartment,
            room_type: Some("2+1".to_string()),
            furnished: false,
            pet_friendly: true,
            amenities: vec!["WiFi".to_string()],
            features: vec![],
            image_url: "cover.jpg".to_string(),
            images: vec!["cover.jpg".to_string()],
            video_url: None,
            location: DEFAULT_LOCATION,
            contact: Contact {
                name: "Ayse".to_string(),
                phone: "+90 555 000 0000".to_string(),
                email: "ayse@example.com".to_string(),
                whatsapp: None,
            },
        }
    }

    fn store_at(start: DateTime<Utc>) -> (Arc<ManualClock>, ListingStore) {
        let clock = Arc::new(ManualClock::new(start));
        let store = ListingStore::new(clock.clone());
        (clock, store)
    }

    fn active_ids(store: &ListingStore) -> Vec<String> {
        store.active_view().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn default_store_runs_on_the_wall_clock() {
        let before = Utc::now();
        let mut store = ListingStore::default();
        let listing = store.create(draft("Flat", "Istanbul")).clone();
        let after = Utc::now();

        assert!(listing.created_at >= before && listing.created_at <= after);
        assert_eq!(store.status(&listing), ListingStatus::Active);
        assert!((28..=31).contains(&store.remaining_days(&listing)));
    }

    #[test]
    fn create_stamps_lifecycle_fields() {
        let (_clock, mut store) = store_at(at(2024, 1, 15));
        let listing = store.create(draft("Flat", "Istanbul")).clone();

        assert_eq!(listing.created_at, at(2024, 1, 15));
        assert_eq!(listing.expires_at, at(2024, 2, 15));
        assert!(listing.is_active);
        assert!(Uuid::parse_str(&listing.id).is_ok());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn newest_listing_comes_first() {
        let (_clock, mut store) = store_at(at(2024, 1, 15));
        let first = store.create(draft("First", "Istanbul")).id.clone();
        let second = store.create(draft("Second", "Istanbul")).id.clone();

        assert_ne!(first, second);
        assert_eq!(active_ids(&store), vec![second, first]);
    }

    #[test]
    fn expired_listing_leaves_active_view_and_comes_back_on_renew() {
        let (clock, mut store) = store_at(at(2024, 1, 15));
        let id = store.create(draft("Flat", "Istanbul")).id.clone();
        let before = store.get(&id).cloned().unwrap();

        clock.set(at(2024, 2, 16));
        assert!(active_ids(&store).is_empty());
        assert_eq!(store.status(&before), ListingStatus::Expired);
        assert_eq!(store.len(), 1);

        let renewed = store.renew(&id).unwrap().clone();
        assert_eq!(renewed.expires_at, at(2024, 3, 16));
        assert_eq!(renewed.id, before.id);
        assert_eq!(renewed.details, before.details);
        assert_eq!(renewed.created_at, before.created_at);
        assert_eq!(active_ids(&store), vec![id]);
        assert_eq!(store.status(&renewed), ListingStatus::Active);
    }

    #[test]
    fn listing_is_visible_through_its_last_instant() {
        let (clock, mut store) = store_at(at(2024, 1, 15));
        store.create(draft("Flat", "Istanbul"));

        clock.set(at(2024, 2, 15));
        assert_eq!(store.active_view().count(), 1);

        clock.advance(Duration::milliseconds(1));
        assert_eq!(store.active_view().count(), 0);
    }

    #[test]
    fn renew_reactivates_inactive_listing() {
        let clock = Arc::new(ManualClock::new(at(2024, 1, 15)));
        let mut hidden = seed_listings(at(2024, 1, 15)).remove(0);
        hidden.is_active = false;
        let mut store = ListingStore::new(clock.clone());
        store.listings.push(hidden);
        assert_eq!(store.active_view().count(), 0);

        store.renew("1").unwrap();
        assert_eq!(active_ids(&store), vec!["1"]);
    }

    #[test]
    fn renew_of_unknown_id_is_an_error() {
        let (_clock, mut store) = store_at(at(2024, 1, 15));
        store.create(draft("Flat", "Istanbul"));

        assert_eq!(
            store.renew("missing").unwrap_err(),
            ListingError::NotFound {
                id: "missing".to_string()
            }
        );
    }

    #[test]
    fn active_view_never_contains_inactive_or_expired() {
        let clock = Arc::new(ManualClock::new(at(2024, 1, 15)));
        let mut store = ListingStore::with_listings(clock.clone(), seed_listings(at(2024, 1, 1)));
        store.listings[1].is_active = false;
        clock.advance(Duration::days(10));
        store.create(draft("Later", "Izmir"));

        clock.set(at(2024, 2, 5));
        for listing in store.active_view() {
            assert!(listing.is_active);
            assert!(!is_expired(listing.expires_at, store.now()));
        }
        assert_eq!(store.active_view().count(), 1);
    }

    #[test]
    fn empty_filter_equals_active_view() {
        let clock = Arc::new(ManualClock::new(at(2024, 1, 15)));
        let mut store = ListingStore::with_listings(clock.clone(), seed_listings(at(2024, 1, 15)));
        store.create(draft("New", "Bursa"));

        let active: Vec<_> = store.active_view().collect();
        assert_eq!(store.filtered_view(&FilterCriteria::default()), active);
    }

    #[test]
    fn city_filter_keeps_relative_order() {
        let (_clock, mut store) = store_at(at(2024, 1, 15));
        let a = store.create(draft("A", "Istanbul")).id.clone();
        store.create(draft("B", "Antalya"));
        let c = store.create(draft("C", "Istanbul")).id.clone();

        let istanbul: Vec<_> = store
            .filtered_view(&FilterCriteria::default().with_city("Istanbul"))
            .into_iter()
            .map(|l| l.id.clone())
            .collect();
        assert_eq!(istanbul, vec![c, a]);
    }

    #[test]
    fn filtered_view_skips_expired_matches() {
        let clock = Arc::new(ManualClock::new(at(2024, 3, 1)));
        let mut store = ListingStore::with_listings(clock.clone(), seed_listings(at(2024, 1, 1)));
        store.create(draft("Fresh", "Istanbul"));

        let istanbul = store.filtered_view(&FilterCriteria::default().with_city("Istanbul"));
        assert_eq!(istanbul.len(), 1);
        assert_eq!(istanbul[0].details.title, "Fresh");
    }

    #[test]
    fn create_from_form_derives_bedrooms() {
        let (_clock, mut store) = store_at(at(2024, 1, 15));
        let room = ListingForm {
            price: "4000".to_string(),
            bathrooms: "1".to_string(),
            area: "20".to_string(),
            property_type: PropertyType::Room,
            room_type: "2".to_string(),
            ..ListingForm::default()
        };
        assert_eq!(store.create_from_form(room).unwrap().details.bedrooms, 2);

        let apartment = ListingForm {
            price: "9000".to_string(),
            bathrooms: "1".to_string(),
            area: "110".to_string(),
            room_type: "3+1".to_string(),
            ..ListingForm::default()
        };
        assert_eq!(store.create_from_form(apartment).unwrap().details.bedrooms, 3);
    }

    #[test]
    fn rejected_form_leaves_store_untouched() {
        let (_clock, mut store) = store_at(at(2024, 1, 15));
        let form = ListingForm {
            price: "abc".to_string(),
            ..ListingForm::default()
        };
        assert!(matches!(
            store.create_from_form(form),
            Err(ListingError::InvalidDraft { field: "price", .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn with_listings_restamps_terms_and_drops_duplicates() {
        let clock = Arc::new(ManualClock::new(at(2024, 1, 20)));
        let mut seeds = seed_listings(at(2024, 1, 15));
        seeds[0].expires_at = at(2030, 1, 1);
        seeds[0].is_active = false;
        let duplicate = seeds[0].clone();
        seeds.push(duplicate);

        let store = ListingStore::with_listings(clock, seeds);
        assert_eq!(store.len(), 3);
        let first = store.get("1").unwrap();
        assert_eq!(first.expires_at, at(2024, 2, 15));
        assert!(first.is_active);
    }

    #[test]
    fn remaining_days_counts_down_with_the_clock() {
        let (clock, mut store) = store_at(at(2024, 1, 15));
        let listing = store.create(draft("Flat", "Istanbul")).clone();
        assert_eq!(store.remaining_days(&listing), 31);

        clock.advance(Duration::days(30) + Duration::hours(1));
        assert_eq!(store.remaining_days(&listing), 1);

        clock.set(at(2024, 2, 17));
        assert_eq!(store.remaining_days(&listing), -2);
    }
}
