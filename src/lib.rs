pub mod config;
pub mod data;
pub mod details;
pub mod error;
pub mod export;
pub mod listings;
pub mod models;

pub use error::ListingError;
pub use listings::{FilterCriteria, ListingStore};
pub use models::{Listing, ListingDraft};
