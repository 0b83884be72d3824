//! Data types for the Anna's Archive store
//!
//! All types implement Serialize and Deserialize so a host can pass them
//! across its own boundaries as JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Price shown for every record; the archive has no paid tier.
pub const FREE_PRICE: &str = "$0.00";

/// DRM state of a store record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrmStatus {
    /// Downloads carry no DRM
    Unlocked,
    /// Downloads are DRM protected
    Locked,
    /// The store does not say
    Unknown,
}

/// One catalog entry found on the search-results page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Opaque archive key taken from the detail-page link (never empty)
    pub content_id: String,
    /// Book title
    pub title: String,
    /// Author line as printed on the card
    pub author: String,
    /// Cover image URL, empty if the card has none
    pub cover_url: String,
    /// Uppercase file extension (e.g. "PDF"), empty when unknown
    pub format: String,
    /// Always [`FREE_PRICE`]
    pub price: String,
    /// Always [`DrmStatus::Unlocked`]
    pub drm: DrmStatus,
    /// Label ("EPUB - Mirror #1") to resolved absolute URL
    pub downloads: HashMap<String, String>,
}

impl SearchResult {
    /// Create an empty record for the given content identifier.
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            title: String::new(),
            author: String::new(),
            cover_url: String::new(),
            format: String::new(),
            price: FREE_PRICE.to_string(),
            drm: DrmStatus::Unlocked,
            downloads: HashMap::new(),
        }
    }

    /// Extension a download URL must end with, e.g. ".epub" for "EPUB".
    ///
    /// Returns `None` when the format is unknown.
    pub fn format_extension(&self) -> Option<String> {
        if self.format.is_empty() {
            None
        } else {
            Some(format!(".{}", self.format.to_lowercase()))
        }
    }

    /// Key under which a resolved link is stored in `downloads`.
    pub fn download_label(&self, link_text: &str) -> String {
        format!("{} - {}", self.format, link_text)
    }
}

/// Candidate download anchor from a detail page, before any filtering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadLink {
    /// Raw href as found on the page
    pub url: String,
    /// Anchor text, trimmed
    pub text: String,
}

/// What the host should show when the user asks to open the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpenRequest {
    /// Hand the URL to the system browser
    External { url: String },
    /// Show the URL in the host's embedded store browser
    Embedded {
        base_url: String,
        url: String,
        title: String,
        tags: String,
    },
}

impl OpenRequest {
    /// URL to display, whichever way it is shown.
    pub fn url(&self) -> &str {
        match self {
            OpenRequest::External { url } | OpenRequest::Embedded { url, .. } => url.as_str(),
        }
    }
}
