//! Store configuration
//!
//! Everything site-specific that is not a parser selector lives here and is
//! fixed once the store is built.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

/// Base URL of Anna's Archive
pub const ANNAS_BASE_URL: &str = "https://annas-archive.org";

/// Default User-Agent mimicking a modern browser
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Default Accept-Language header
const DEFAULT_ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

/// Number of results a search yields when the host does not say
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Per-request timeout when the host does not say
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Display name, used as the embedded browser title
    pub name: String,
    /// Site root all page URLs are built from
    pub base_url: String,
    /// User-Agent for page fetches
    pub user_agent: String,
    /// Accept-Language for page fetches
    pub accept_language: String,
    /// Always open pages in the system browser
    pub open_external: bool,
    /// Tags handed to the embedded browser
    pub tags: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "Anna's Archive".to_string(),
            base_url: ANNAS_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            open_external: false,
            tags: String::new(),
        }
    }
}

impl StoreConfig {
    /// Default configuration pointed at another site root (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load settings persisted by the host. Missing keys keep their defaults.
    ///
    /// # Errors
    /// `StoreError::InvalidConfig` if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_config_default() {
        let config = StoreConfig::default();
        assert_eq!(config.base_url, "https://annas-archive.org");
        assert_eq!(config.name, "Anna's Archive");
        assert!(!config.open_external);
        assert!(config.tags.is_empty());
    }

    #[test]
    fn test_with_base_url() {
        let config = StoreConfig::with_base_url("http://127.0.0.1:8080");
        assert_eq!(config.base_url, "http://127.0.0.1:8080");
        assert_eq!(config.user_agent, StoreConfig::default().user_agent);
    }

    #[test]
    fn test_from_json_partial() {
        let config = StoreConfig::from_json(r#"{"open_external": true, "tags": "ebook, free"}"#).unwrap();
        assert!(config.open_external);
        assert_eq!(config.tags, "ebook, free");
        assert_eq!(config.base_url, ANNAS_BASE_URL);
    }

    #[test]
    fn test_from_json_invalid() {
        let result = StoreConfig::from_json("{not json");
        assert!(matches!(result, Err(StoreError::InvalidConfig(_))));
    }
}
