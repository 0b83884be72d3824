//! HTTP clients for Anna's Archive
//!
//! Two independent reqwest clients live here:
//! - a browser-like client (User-Agent, Accept-Language, cookie store) for the
//!   search and detail pages
//! - a bare prober used for HEAD requests against candidate download links,
//!   which frequently point at third-party mirrors
//!
//! Neither retries. Every request carries the caller's timeout.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CONTENT_TYPE};
use tracing::debug;

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};

/// Top-level type assumed when a response has no usable Content-Type
const FALLBACK_MAINTYPE: &str = "text";

/// HTTP access for the store: page fetches and download probes
pub struct StoreClient {
    /// Browser-like client for HTML pages
    browser: reqwest::Client,
    /// Plain client for HEAD probes
    prober: reqwest::Client,
}

impl StoreClient {
    /// Create a client with the default configuration
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(&StoreConfig::default())
    }

    /// Create a client using the headers from `config`
    ///
    /// # Errors
    /// - `StoreError::InvalidConfig` - a header value is not valid
    /// - `StoreError::HttpError` - reqwest refused to build a client
    pub fn with_config(config: &StoreConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_str(&config.accept_language)
                .map_err(|e| StoreError::InvalidConfig(format!("accept_language: {}", e)))?,
        );

        let browser = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        let prober = reqwest::Client::builder().build()?;

        Ok(Self { browser, prober })
    }

    /// Fetch an HTML page
    ///
    /// # Arguments
    /// * `url` - Absolute page URL
    /// * `timeout` - Limit for the whole request
    ///
    /// # Errors
    /// - `StoreError::NotFound` - server returned 404
    /// - `StoreError::HttpError` - transport error, timeout or other error status
    pub async fn fetch(&self, url: &str, timeout: Duration) -> Result<String> {
        debug!(%url, "Fetching page");

        let response = self.browser.get(url).timeout(timeout).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(url.to_string()));
        }

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    /// Send a HEAD request and report the top-level media type of the answer
    ///
    /// Only headers are transferred; the response is released before returning.
    ///
    /// # Returns
    /// The lowercase top-level type, e.g. `"application"` for `application/pdf`.
    ///
    /// # Errors
    /// `StoreError::HttpError` on transport error, timeout or error status
    pub async fn probe(&self, url: &str, timeout: Duration) -> Result<String> {
        let response = self
            .prober
            .head(url)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        Ok(content_maintype(content_type))
    }
}

/// Top-level media type of a Content-Type header value.
///
/// A missing or malformed value is treated as `text/plain`.
///
/// # Examples
/// ```
/// use annas_core::client::content_maintype;
///
/// assert_eq!(content_maintype(Some("application/epub+zip")), "application");
/// assert_eq!(content_maintype(Some("text/html; charset=utf-8")), "text");
/// assert_eq!(content_maintype(None), "text");
/// ```
pub fn content_maintype(content_type: Option<&str>) -> String {
    let Some(value) = content_type else {
        return FALLBACK_MAINTYPE.to_string();
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    match essence.split_once('/') {
        Some((main, sub)) if !main.is_empty() && !sub.is_empty() && !sub.contains('/') => {
            main.to_ascii_lowercase()
        }
        _ => FALLBACK_MAINTYPE.to_string(),
    }
}
