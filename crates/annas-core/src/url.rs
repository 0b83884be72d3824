//! URL helpers for Anna's Archive
//!
//! Pure string builders; nothing here touches the network.

/// Build the search page URL for a query.
///
/// # Examples
/// ```
/// use annas_core::url::build_search_url;
///
/// assert_eq!(
///     build_search_url("https://annas-archive.org", "brave new world"),
///     "https://annas-archive.org/search?q=brave%20new%20world"
/// );
/// ```
pub fn build_search_url(base_url: &str, query: &str) -> String {
    format!(
        "{}/search?q={}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(query)
    )
}

/// Build the detail page URL for a content identifier.
///
/// # Examples
/// ```
/// use annas_core::url::build_detail_url;
///
/// assert_eq!(
///     build_detail_url("https://annas-archive.org", "d6e1dc51a50726f00ec438af21952a45"),
///     "https://annas-archive.org/md5/d6e1dc51a50726f00ec438af21952a45"
/// );
/// ```
pub fn build_detail_url(base_url: &str, content_id: &str) -> String {
    format!("{}/md5/{}", base_url.trim_end_matches('/'), content_id)
}

/// Make a download href absolute.
///
/// Hrefs starting with `/` are site-relative and get the base URL prepended;
/// anything else is returned unchanged.
pub fn absolutize_link(base_url: &str, href: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}

/// Extract the content identifier from a detail-page href.
///
/// The identifier is whatever follows the last `/`. Returns `None` when that
/// segment is empty (e.g. a trailing slash).
///
/// # Examples
/// ```
/// use annas_core::url::extract_content_id;
///
/// assert_eq!(extract_content_id("/md5/abc123"), Some("abc123".to_string()));
/// assert_eq!(extract_content_id("/md5/"), None);
/// ```
pub fn extract_content_id(href: &str) -> Option<String> {
    let segment = href.rsplit('/').next()?;
    if segment.is_empty() {
        None
    } else {
        Some(segment.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_encodes_query() {
        assert_eq!(
            build_search_url("https://annas-archive.org", "1984"),
            "https://annas-archive.org/search?q=1984"
        );
        assert_eq!(
            build_search_url("https://annas-archive.org", "war & peace"),
            "https://annas-archive.org/search?q=war%20%26%20peace"
        );
    }

    #[test]
    fn test_build_search_url_trailing_slash() {
        assert_eq!(
            build_search_url("http://localhost:8080/", "x"),
            "http://localhost:8080/search?q=x"
        );
    }

    #[test]
    fn test_build_detail_url() {
        assert_eq!(
            build_detail_url("https://annas-archive.org/", "abc"),
            "https://annas-archive.org/md5/abc"
        );
    }

    #[test]
    fn test_absolutize_link() {
        assert_eq!(
            absolutize_link("https://annas-archive.org", "/slow_download/abc/0/0.epub"),
            "https://annas-archive.org/slow_download/abc/0/0.epub"
        );
        assert_eq!(
            absolutize_link("https://annas-archive.org", "https://mirror.example/book.epub"),
            "https://mirror.example/book.epub"
        );
    }

    #[test]
    fn test_extract_content_id() {
        assert_eq!(
            extract_content_id("/md5/d6e1dc51a50726f00ec438af21952a45"),
            Some("d6e1dc51a50726f00ec438af21952a45".to_string())
        );
        assert_eq!(
            extract_content_id("https://annas-archive.org/md5/abc"),
            Some("abc".to_string())
        );
        assert_eq!(extract_content_id("plainid"), Some("plainid".to_string()));
        assert_eq!(extract_content_id("/md5/"), None);
        assert_eq!(extract_content_id(""), None);
    }
}
