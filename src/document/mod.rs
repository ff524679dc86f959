//! Document model adapter over parsed HTML
//!
//! Wraps a parsed HTML tree behind the queries the analyzers need:
//! - find-all / find-first element lookup
//! - text extraction, raw or whitespace-normalized
//! - title, meta description, headings, main-content region
//! - embedded JSON-LD script blocks
//!
//! Parsing is total: malformed markup never fails, and a missing element
//! is a queryable `None`/empty state rather than an error.

use crate::text::collapse_whitespace;
use scraper::{ElementRef, Html, Selector};

/// A heading element in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// Heading level parsed from the tag name (1 for `<h1>` .. 6 for `<h6>`)
    pub level: u32,
    /// Trimmed text content of the heading
    pub text: String,
}

/// An in-memory tree of a fetched page's markup
///
/// Owned by exactly one analysis run and read-only after construction.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses raw markup into a queryable document
    ///
    /// Tolerates unclosed tags and missing elements; never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Returns all elements matching the selector, in document order
    ///
    /// A selector that fails to parse yields an empty result.
    pub fn find_all(&self, selectors: &str) -> Vec<ElementRef<'_>> {
        match Selector::parse(selectors) {
            Ok(selector) => self.html.select(&selector).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Returns the first element matching the selector
    pub fn find_first(&self, selectors: &str) -> Option<ElementRef<'_>> {
        Selector::parse(selectors)
            .ok()
            .and_then(|selector| self.html.select(&selector).next())
    }

    /// Returns the trimmed text of the `<title>` element, if present
    pub fn title(&self) -> Option<String> {
        self.find_first("title")
            .map(|element| element_text(element, true))
    }

    /// Returns the `content` attribute of `<meta name="description">`, if present
    pub fn meta_description(&self) -> Option<String> {
        self.find_first(r#"meta[name="description"]"#)
            .and_then(|element| element.value().attr("content"))
            .map(|s| s.to_string())
    }

    /// Returns the trimmed text of the first `<h1>`, if present
    pub fn first_h1_text(&self) -> Option<String> {
        self.find_first("h1").map(|element| element_text(element, true))
    }

    /// Collects h1..h6 headings in document order
    ///
    /// The level is parsed from the tag name's numeric suffix; an element
    /// whose name does not carry one is skipped.
    pub fn headings(&self) -> Vec<Heading> {
        self.find_all("h1, h2, h3, h4, h5, h6")
            .into_iter()
            .filter_map(|element| {
                let level = heading_level(element.value().name())?;
                Some(Heading {
                    level,
                    text: element_text(element, true),
                })
            })
            .collect()
    }

    /// Extracts the text of the main content region
    ///
    /// The region is the first match among `<main>`, `<article>`, `<body>`;
    /// first match wins. An empty document yields an empty string.
    pub fn main_content_text(&self, normalize: bool) -> String {
        for selectors in ["main", "article", "body"] {
            if let Some(element) = self.find_first(selectors) {
                return element_text(element, normalize);
            }
        }
        String::new()
    }

    /// Returns the raw contents of every `<script type="application/ld+json">` block
    pub fn ld_json_blocks(&self) -> Vec<String> {
        self.find_all(r#"script[type="application/ld+json"]"#)
            .into_iter()
            .map(|element| element.text().collect::<String>())
            .collect()
    }
}

/// Extracts the text content of an element
///
/// With `normalize` set, runs of whitespace collapse to single spaces and
/// the ends are trimmed; otherwise text nodes are concatenated as-is.
pub fn element_text(element: ElementRef<'_>, normalize: bool) -> String {
    let text = element.text().collect::<String>();
    if normalize {
        collapse_whitespace(&text)
    } else {
        text
    }
}

/// Parses a heading level from a tag name such as `h2`
fn heading_level(name: &str) -> Option<u32> {
    let mut chars = name.chars();
    if chars.next() != Some('h') {
        return None;
    }
    chars.as_str().parse::<u32>().ok().filter(|l| (1..=6).contains(l))
}
