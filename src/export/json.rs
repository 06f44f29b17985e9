use crate::export::traits::ListingSink;
use crate::models::Listing;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes a listing view as a pretty-printed JSON array
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ListingSink for JsonFileSink {
    async fn write(&self, listings: &[&Listing]) -> Result<usize> {
        let json = serde_json::to_string_pretty(listings).context("Failed to serialize listings")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        info!("💾 Saved {} listings to {}", listings.len(), self.path.display());
        Ok(listings.len())
    }

    fn sink_name(&self) -> &'static str {
        "JSON file"
    }
}
