//! Title and meta-description analysis

use crate::document::ParsedDocument;
use serde::Serialize;

/// Search engines truncate titles beyond this many characters
pub const TITLE_LENGTH_LIMIT: usize = 65;

/// Search engines truncate descriptions beyond this many characters
pub const DESCRIPTION_LENGTH_LIMIT: usize = 160;

/// Status of one HTML metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldStatus {
    Missing,
    Empty,
    Good,
    TooLong,
}

impl FieldStatus {
    /// The status as it appears in serialized reports
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldStatus::Missing => "missing",
            FieldStatus::Empty => "empty",
            FieldStatus::Good => "good",
            FieldStatus::TooLong => "too-long",
        }
    }
}

/// Report for a single metadata field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaField {
    pub text: String,
    pub length: usize,
    pub status: FieldStatus,
}

impl MetaField {
    /// The zero-value used when the element is absent from the page
    fn missing() -> Self {
        Self {
            text: String::new(),
            length: 0,
            status: FieldStatus::Missing,
        }
    }

    /// Classifies the trimmed text of a present element against a length limit
    ///
    /// The limit is boundary-inclusive: a length equal to the limit is good.
    fn from_text(text: &str, limit: usize) -> Self {
        let text = text.trim().to_string();
        let length = text.chars().count();
        let status = if length == 0 {
            FieldStatus::Empty
        } else if length > limit {
            FieldStatus::TooLong
        } else {
            FieldStatus::Good
        };
        Self {
            text,
            length,
            status,
        }
    }
}

/// Combined report for the title and meta-description fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaTagReport {
    pub title: MetaField,
    pub meta_description: MetaField,
}

/// Analyzes the `<title>` and `<meta name="description">` elements
///
/// Both fields are always present in the report, defaulting to the
/// missing state when the element is absent.
pub fn analyze_meta_tags(doc: &ParsedDocument) -> MetaTagReport {
    let title = match doc.title() {
        Some(text) => MetaField::from_text(&text, TITLE_LENGTH_LIMIT),
        None => MetaField::missing(),
    };

    let meta_description = match doc.meta_description() {
        Some(text) => MetaField::from_text(&text, DESCRIPTION_LENGTH_LIMIT),
        None => MetaField::missing(),
    };

    MetaTagReport {
        title,
        meta_description,
    }
}
