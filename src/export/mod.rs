pub mod json;
pub mod traits;

pub use json::JsonFileSink;
pub use traits::ListingSink;
