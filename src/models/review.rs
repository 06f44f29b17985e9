use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tenant review attached to a property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub property_id: String,
    pub author: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub comment: String,
    pub date: DateTime<Utc>,
}
