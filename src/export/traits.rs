use crate::models::Listing;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for places a listing view can be written to
#[async_trait]
pub trait ListingSink: Send + Sync {
    /// Write the given listings, returning how many were written
    async fn write(&self, listings: &[&Listing]) -> Result<usize>;

    /// Get the name of the sink for log lines
    fn sink_name(&self) -> &'static str;
}
