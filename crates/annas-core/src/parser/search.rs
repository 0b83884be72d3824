//! Search results parser for Anna's Archive
//!
//! Result cards sit in `div.mb-4 > div.h-[125]` containers. Depending on how the
//! page was rendered, a container either holds the card markup directly or
//! holds a single HTML comment whose text is that markup. Containers are
//! classified once into a [`Card`]; field extraction happens lazily while the
//! caller iterates [`SearchResults`].

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::error::{Result, StoreError};
use crate::types::SearchResult;
use crate::url::extract_content_id;

/// Result card containers on the search page
const CARD_SELECTOR: &str = r#"div[class="mb-4"] > div[class*="h-[125]"]"#;

// Field selectors, relative to the root of a card's markup
const ANCHOR_SELECTOR: &str = "html > a";
const COVER_SELECTOR: &str = r#"html > a > div[class*="flex-none"] > div > img"#;
const TITLE_SELECTOR: &str = "html > a > div > h3";
const AUTHOR_SELECTOR: &str = r#"html > a > div > div[class*="italic"]"#;
const INFO_SELECTOR: &str = r#"html > a > div > div[class*="text-gray-500"]"#;

/// One result container, classified by where its markup lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    /// Container has element children; holds its inner HTML
    Direct(String),
    /// Container has no elements but a comment; holds the comment text
    Commented(String),
    /// Neither elements nor a comment
    Malformed,
}

impl Card {
    /// Classify a result container.
    pub fn classify(container: &ElementRef) -> Self {
        let has_elements = container.children().any(|child| child.value().is_element());
        if has_elements {
            return Card::Direct(container.inner_html());
        }

        let comment = container
            .children()
            .find_map(|child| child.value().as_comment().map(|comment| String::from(&**comment)));

        match comment {
            Some(markup) => Card::Commented(markup),
            None => Card::Malformed,
        }
    }

    /// Markup to extract fields from, `None` for malformed cards.
    pub fn markup(&self) -> Option<&str> {
        match self {
            Card::Direct(markup) | Card::Commented(markup) => Some(markup.as_str()),
            Card::Malformed => None,
        }
    }
}

/// The comma-separated info line of a card
///
/// The line reads `language, format, size, filename`. Only the first three
/// commas separate fields; filenames may contain commas of their own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardInfo {
    pub language: String,
    /// Uppercase, e.g. "EPUB"
    pub format: String,
    pub size: String,
    pub filename: String,
}

impl CardInfo {
    /// Split an info line. Missing fields come back empty.
    ///
    /// # Examples
    /// ```
    /// use annas_core::parser::CardInfo;
    ///
    /// let info = CardInfo::parse("English [en], epub, 0.4MB, Orwell, George - 1984.epub");
    /// assert_eq!(info.format, "EPUB");
    /// assert_eq!(info.filename, "Orwell, George - 1984.epub");
    /// ```
    pub fn parse(info: &str) -> Self {
        let mut parts = info.trim().trim_matches('"').splitn(4, ',');
        let mut next = || parts.next().map(str::trim).unwrap_or_default().to_string();

        let language = next();
        let format = next().to_uppercase();
        let size = next();
        let filename = next();

        Self {
            language,
            format,
            size,
            filename,
        }
    }
}

/// Compiled selectors for the fields of a card
#[derive(Debug, Clone)]
struct CardFields {
    anchor: Selector,
    cover: Selector,
    title: Selector,
    author: Selector,
    info: Selector,
}

impl CardFields {
    fn new() -> Result<Self> {
        Ok(Self {
            anchor: compile(ANCHOR_SELECTOR)?,
            cover: compile(COVER_SELECTOR)?,
            title: compile(TITLE_SELECTOR)?,
            author: compile(AUTHOR_SELECTOR)?,
            info: compile(INFO_SELECTOR)?,
        })
    }

    /// Extract a record from a card; `None` when the card has no content id.
    fn extract(&self, card: &Card) -> Option<SearchResult> {
        let Some(markup) = card.markup() else {
            debug!("Skipping result card without markup");
            return None;
        };
        let fragment = Html::parse_fragment(markup);

        let content_id = fragment
            .select(&self.anchor)
            .next()
            .and_then(|anchor| anchor.value().attr("href"))
            .and_then(extract_content_id);
        let Some(content_id) = content_id else {
            debug!("Skipping result card without content id");
            return None;
        };

        let mut result = SearchResult::new(content_id);
        result.cover_url = fragment
            .select(&self.cover)
            .filter_map(|img| img.value().attr("src"))
            .collect();
        result.title = joined_own_text(&fragment, &self.title);
        result.author = joined_own_text(&fragment, &self.author);
        result.format = CardInfo::parse(&joined_own_text(&fragment, &self.info)).format;

        Some(result)
    }
}

/// Lazy, bounded sequence of search results in page order
///
/// Created by [`parse_search_results`]. Single pass: once exhausted it stays
/// exhausted.
#[derive(Debug)]
pub struct SearchResults {
    cards: std::vec::IntoIter<Card>,
    fields: CardFields,
    remaining: usize,
}

impl Iterator for SearchResults {
    type Item = SearchResult;

    fn next(&mut self) -> Option<SearchResult> {
        while self.remaining > 0 {
            let card = self.cards.next()?;
            if let Some(result) = self.fields.extract(&card) {
                self.remaining -= 1;
                return Some(result);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.cards.len().min(self.remaining)))
    }
}

/// Parse search results from the search page HTML.
///
/// # Arguments
/// * `html` - Raw HTML of the search results page
/// * `max_results` - Upper bound on the number of records yielded
///
/// # Returns
/// * `Ok(SearchResults)` iterating at most `max_results` records
/// * `Err(StoreError::ParseError)` if a selector fails to compile
pub fn parse_search_results(html: &str, max_results: usize) -> Result<SearchResults> {
    let fields = CardFields::new()?;
    let card_selector = compile(CARD_SELECTOR)?;

    let document = Html::parse_document(html);
    let cards: Vec<Card> = document
        .select(&card_selector)
        .map(|container| Card::classify(&container))
        .collect();

    debug!(cards = cards.len(), max_results, "Parsed search page");

    Ok(SearchResults {
        cards: cards.into_iter(),
        fields,
        remaining: max_results,
    })
}

/// Concatenated own text (direct text children) of every match.
fn joined_own_text(fragment: &Html, selector: &Selector) -> String {
    let text: String = fragment
        .select(selector)
        .flat_map(|element| {
            element
                .children()
                .filter_map(|child| child.value().as_text().map(|text| String::from(&**text)))
        })
        .collect();
    text.trim().to_string()
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| StoreError::ParseError(format!("Invalid selector {}: {:?}", selector, e)))
}
