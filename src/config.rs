use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Runtime settings for the listings front end
#[derive(Debug, Clone)]
pub struct Config {
    /// Listings page query, e.g. `?city=Istanbul`
    pub query: String,
    /// Where the filtered view is saved
    pub export_path: PathBuf,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            query: env::var("LISTINGS_QUERY").unwrap_or_default(),
            export_path: env::var("LISTINGS_EXPORT_PATH")
                .unwrap_or_else(|_| "listings.json".to_string())
                .into(),
        })
    }

    /// Command-line query overrides the environment
    pub fn with_args(mut self, mut args: impl Iterator<Item = String>) -> Self {
        if let Some(query) = args.next() {
            self.query = query;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            query: "?city=Antalya".to_string(),
            export_path: "listings.json".into(),
        }
    }

    #[test]
    fn first_argument_replaces_query() {
        let args = vec!["?city=Istanbul".to_string(), "ignored".to_string()];
        assert_eq!(config().with_args(args.into_iter()).query, "?city=Istanbul");
    }

    #[test]
    fn no_arguments_keep_environment_query() {
        assert_eq!(config().with_args(std::iter::empty()).query, "?city=Antalya");
    }
}
