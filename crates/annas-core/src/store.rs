//! Main Anna's Archive store API
//!
//! Combines the HTTP clients with the parsers into the three entry points a
//! host needs: `search`, `resolve` and `open`.

use std::time::Duration;

use tracing::debug;

use crate::client::StoreClient;
use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::parser::{parse_download_links, parse_search_results, SearchResults};
use crate::types::{OpenRequest, SearchResult};
use crate::url::{absolutize_link, build_detail_url, build_search_url};

/// Top-level media type a probed download must report
const ACCEPTED_MAINTYPE: &str = "application";

/// Store search and download resolution for Anna's Archive
///
/// Every call is independent: nothing is cached between searches or
/// resolutions, and network calls inside one operation run one after another.
///
/// # Example
/// ```no_run
/// use annas_core::{AnnasArchiveStore, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let store = AnnasArchiveStore::new()?;
///
///     let mut results: Vec<_> = store
///         .search("1984", DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT)
///         .await?
///         .collect();
///
///     if let Some(book) = results.first_mut() {
///         store.resolve(book, DEFAULT_TIMEOUT).await?;
///         println!("{} download links", book.downloads.len());
///     }
///     Ok(())
/// }
/// ```
pub struct AnnasArchiveStore {
    client: StoreClient,
    config: StoreConfig,
}

impl AnnasArchiveStore {
    /// Create a store with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP clients cannot be created.
    pub fn new() -> Result<Self> {
        Self::with_config(StoreConfig::default())
    }

    /// Create a store with custom configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP clients cannot be created from `config`.
    pub fn with_config(config: StoreConfig) -> Result<Self> {
        let client = StoreClient::with_config(&config)?;
        Ok(Self { client, config })
    }

    /// Configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Search the archive.
    ///
    /// Fetches the search page once and returns a lazy iterator over at most
    /// `max_results` records in page order. Cards the parser cannot make sense
    /// of are skipped silently.
    ///
    /// # Arguments
    /// * `query` - Free-text query
    /// * `max_results` - Cap on yielded records
    /// * `timeout` - Limit for the page fetch
    ///
    /// # Errors
    /// * `StoreError::InvalidQuery` if query is empty or whitespace-only
    /// * `StoreError::HttpError` / `StoreError::NotFound` if the page fetch fails
    #[tracing::instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        max_results: usize,
        timeout: Duration,
    ) -> Result<SearchResults> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(StoreError::InvalidQuery(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = build_search_url(&self.config.base_url, trimmed);
        let html = self.client.fetch(&url, timeout).await?;

        parse_search_results(&html, max_results)
    }

    /// Fill `result.downloads` with direct download links.
    ///
    /// Does nothing when the record has no format. Otherwise fetches the
    /// detail page, keeps the links whose URL ends with the format extension
    /// and probes each with HEAD. A link is kept when the probe answers with an
    /// `application/*` Content-Type; a failed probe only drops that link.
    ///
    /// # Arguments
    /// * `result` - Record to resolve, updated in place
    /// * `timeout` - Limit for the page fetch and for each probe
    ///
    /// # Errors
    /// `StoreError::HttpError` / `StoreError::NotFound` if the detail page
    /// cannot be fetched. `result.downloads` is left untouched in that case.
    #[tracing::instrument(skip(self, result), fields(content_id = %result.content_id))]
    pub async fn resolve(&self, result: &mut SearchResult, timeout: Duration) -> Result<()> {
        let Some(extension) = result.format_extension() else {
            debug!("No format on record, nothing to resolve");
            return Ok(());
        };

        let url = build_detail_url(&self.config.base_url, &result.content_id);
        let html = self.client.fetch(&url, timeout).await?;

        for link in parse_download_links(&html)? {
            // Cheap filter; a direct link without the extension is missed
            if !link.url.ends_with(&extension) {
                continue;
            }

            let url = absolutize_link(&self.config.base_url, &link.url);
            match self.client.probe(&url, timeout).await {
                Ok(maintype) if maintype == ACCEPTED_MAINTYPE => {
                    debug!(%url, "Accepted download link");
                    let label = result.download_label(&link.text);
                    result.downloads.insert(label, url);
                }
                Ok(maintype) => debug!(%url, %maintype, "Rejected download link"),
                Err(e) => debug!(%url, error = %e, "Download probe failed"),
            }
        }

        Ok(())
    }

    /// Describe how the host should show the store.
    ///
    /// Points at the detail page when `detail_item` is a non-empty content id,
    /// at the site root otherwise. `external` (or `open_external` in the
    /// configuration) selects the system browser over the embedded one.
    pub fn open(&self, detail_item: Option<&str>, external: bool) -> OpenRequest {
        let url = match detail_item {
            Some(id) if !id.is_empty() => build_detail_url(&self.config.base_url, id),
            _ => self.config.base_url.clone(),
        };

        if external || self.config.open_external {
            OpenRequest::External { url }
        } else {
            OpenRequest::Embedded {
                base_url: self.config.base_url.clone(),
                url,
                title: self.config.name.clone(),
                tags: self.config.tags.clone(),
            }
        }
    }
}
