//! HTML parsers for Anna's Archive pages
//!
//! - `search`: result cards on the search page
//! - `detail`: download links on a detail page

pub mod detail;
pub mod search;

// Re-export main parsing functions
pub use detail::parse_download_links;
pub use search::{parse_search_results, Card, CardInfo, SearchResults};
