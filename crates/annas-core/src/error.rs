//! Error types for the Anna's Archive store
//!
//! Only page-level failures ever reach the caller. Per-card markup problems and
//! per-link probe failures are absorbed where they happen and simply shrink the
//! output. StoreError implements Serialize so hosts can forward it as a string.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// HTTP request failed, timed out or returned an error status
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Page fetch returned 404
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Search query was empty
    #[error("Invalid search query: {0}")]
    InvalidQuery(String),

    /// Failed to prepare HTML parsing (selector compilation)
    #[error("Failed to parse HTML: {0}")]
    ParseError(String),

    /// Store configuration could not be applied
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl StoreError {
    /// True when the underlying request ran into the caller's timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, StoreError::HttpError(e) if e.is_timeout())
    }

    /// True for every failure that came from talking to the site.
    pub fn is_network(&self) -> bool {
        matches!(self, StoreError::HttpError(_) | StoreError::NotFound(_))
    }
}

/// Serialize StoreError as its display string
impl Serialize for StoreError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_not_found() {
        let error = StoreError::NotFound("https://annas-archive.org/md5/abc".to_string());
        assert_eq!(
            error.to_string(),
            "Page not found: https://annas-archive.org/md5/abc"
        );
    }

    #[test]
    fn test_store_error_display_invalid_query() {
        let error = StoreError::InvalidQuery("query cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid search query: query cannot be empty");
    }

    #[test]
    fn test_store_error_display_parse_error() {
        let error = StoreError::ParseError("bad selector".to_string());
        assert_eq!(error.to_string(), "Failed to parse HTML: bad selector");
    }

    #[test]
    fn test_store_error_display_invalid_config() {
        let error = StoreError::InvalidConfig("accept_language".to_string());
        assert_eq!(error.to_string(), "Invalid configuration: accept_language");
    }

    #[test]
    fn test_non_http_errors_are_not_timeouts() {
        assert!(!StoreError::InvalidQuery(String::new()).is_timeout());
        assert!(!StoreError::NotFound(String::new()).is_timeout());
    }

    #[test]
    fn test_is_network() {
        assert!(StoreError::NotFound("x".to_string()).is_network());
        assert!(!StoreError::InvalidQuery("x".to_string()).is_network());
        assert!(!StoreError::ParseError("x".to_string()).is_network());
    }

    #[test]
    fn test_store_error_serialize() {
        let error = StoreError::ParseError("test error".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Failed to parse HTML: test error\"");
    }
}
