pub mod dates;
pub mod filters;
pub mod form;
pub mod store;
pub mod traits;
pub mod types;

pub use filters::filter_listings;
pub use form::{ContactForm, ListingForm};
pub use store::ListingStore;
pub use traits::{Clock, ManualClock, SystemClock};
pub use types::{FilterCriteria, PriceRange};
