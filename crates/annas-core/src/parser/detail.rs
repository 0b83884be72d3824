//! Detail page parser for Anna's Archive
//!
//! Extracts the candidate download anchors from the downloads panel of an
//! `/md5/<id>` page.

use scraper::{Html, Selector};

use crate::error::{Result, StoreError};
use crate::types::DownloadLink;

/// Download anchors inside the downloads panel
const DOWNLOAD_LINK_SELECTOR: &str =
    r#"div#md5-panel-downloads > div > ul > li > a[class*="js-download-link"]"#;

/// Parse candidate download links from detail page HTML.
///
/// Anchors without an `href` are dropped. Order follows the page.
///
/// # Arguments
/// * `html` - Raw HTML content of the detail page
///
/// # Returns
/// * `Ok(Vec<DownloadLink>)` with every candidate anchor
/// * `Err(StoreError::ParseError)` if the selector fails to compile
pub fn parse_download_links(html: &str) -> Result<Vec<DownloadLink>> {
    let selector = Selector::parse(DOWNLOAD_LINK_SELECTOR)
        .map_err(|e| StoreError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let document = Html::parse_document(html);
    let links = document
        .select(&selector)
        .filter_map(|anchor| {
            let url = anchor.value().attr("href")?.to_string();
            let text = anchor.text().collect::<String>().trim().to_string();
            Some(DownloadLink { url, text })
        })
        .collect();

    Ok(links)
}
