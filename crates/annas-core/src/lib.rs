//! Anna's Archive Store Core Library
//!
//! This crate provides the store-search side of an e-book manager plugin for
//! Anna's Archive.
//!
//! # Features
//! - Search the archive and read result cards into [`SearchResult`] records
//! - Resolve a record to direct download URLs, checked with HEAD probes
//! - Describe how the host should open the store or a detail page
//!
//! # Example
//! ```no_run
//! use annas_core::{AnnasArchiveStore, Result, DEFAULT_TIMEOUT};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = AnnasArchiveStore::new()?;
//!
//!     for book in store.search("brave new world", 5, DEFAULT_TIMEOUT).await? {
//!         println!("{} by {} [{}]", book.title, book.author, book.format);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod parser;
pub mod store;
pub mod types;
pub mod url;

// Re-export main types for convenience
pub use client::StoreClient;
pub use config::{StoreConfig, ANNAS_BASE_URL, DEFAULT_MAX_RESULTS, DEFAULT_TIMEOUT};
pub use error::{Result, StoreError};
pub use parser::SearchResults;
pub use store::AnnasArchiveStore;
pub use types::{DownloadLink, DrmStatus, OpenRequest, SearchResult, FREE_PRICE};
