use crate::error::{ListingError, Result};
use crate::models::Listing;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

/// Links behind the call, mail and WhatsApp buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactLinks {
    pub phone: String,
    pub email: String,
    pub whatsapp: Option<String>,
}

impl ContactLinks {
    pub fn for_listing(listing: &Listing) -> Self {
        let contact = &listing.details.contact;
        Self {
            phone: format!("tel:{}", contact.phone),
            email: format!("mailto:{}", contact.email),
            whatsapp: contact
                .whatsapp
                .as_ref()
                .map(|number| format!("https://wa.me/{}", number)),
        }
    }
}

/// Message left for a landlord from the detail page.
/// Nothing is delivered yet; sending only records it in the log.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub property_id: String,
    pub recipient: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl ContactMessage {
    pub fn send(listing: &Listing, body: &str, sent_at: DateTime<Utc>) -> Result<Self> {
        let body = body.trim();
        if body.is_empty() {
            return Err(ListingError::EmptyMessage);
        }

        let message = Self {
            property_id: listing.id.clone(),
            recipient: listing.details.contact.name.clone(),
            body: body.to_string(),
            sent_at,
        };
        info!(
            "Message sent to {} about listing {}: {}",
            message.recipient, message.property_id, message.body
        );
        Ok(message)
    }
}
