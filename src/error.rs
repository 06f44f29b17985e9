use thiserror::Error;

/// Errors surfaced by the listing store and its helpers
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ListingError {
    #[error("listing '{id}' not found")]
    NotFound { id: String },

    #[error("invalid value for {field}: '{value}'")]
    InvalidDraft { field: &'static str, value: String },

    #[error("invalid price range '{0}'")]
    InvalidPriceRange(String),

    #[error("contact message is empty")]
    EmptyMessage,
}

pub type Result<T> = std::result::Result<T, ListingError>;
