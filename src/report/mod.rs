//! Per-URL analysis reports and their export formats
//!
//! The report types here define the stable outbound field set. Reasoning
//! failures never remove fields from an otherwise complete report; they
//! surface as error-flagged sub-fields in the slot they belong to. A
//! failed fetch produces the `{url, error}` shape with nothing else.

mod export;

pub use export::{format_csv, render_summary, write_csv_export, write_json_export};

use crate::analyzers::{MetaTagReport, ReadabilityReport, SchemaPresence};
use crate::reasoning::TopicalGaps;
use crate::ReasoningError;
use serde::Serialize;

/// Title-rewrite suggestions slot
#[derive(Debug, Clone, Serialize)]
pub struct TitleSuggestions {
    pub suggestions: String,
    pub error: Option<String>,
}

impl TitleSuggestions {
    pub fn from_result(result: Result<String, ReasoningError>) -> Self {
        match result {
            Ok(suggestions) => Self {
                suggestions,
                error: None,
            },
            Err(e) => Self {
                suggestions: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Topical-gap discovery slot
#[derive(Debug, Clone, Serialize)]
pub struct TopicalGapsReport {
    pub raw_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TopicalGapsReport {
    pub fn from_result(result: &Result<TopicalGaps, ReasoningError>) -> Self {
        match result {
            Ok(gaps) => Self {
                raw_text: gaps.raw_text.clone(),
                error: None,
            },
            Err(e) => Self {
                raw_text: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Content-structure suggestions slot
#[derive(Debug, Clone, Serialize)]
pub struct ContentStructureReport {
    pub heading_suggestions: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContentStructureReport {
    pub fn from_result(result: Result<String, ReasoningError>) -> Self {
        match result {
            Ok(heading_suggestions) => Self {
                heading_suggestions,
                error: None,
            },
            Err(e) => Self {
                heading_suggestions: String::new(),
                error: Some(e.to_string()),
            },
        }
    }
}

/// Meta-tag analysis plus the model's title suggestions
#[derive(Debug, Clone, Serialize)]
pub struct MetaAnalysis {
    pub tags: MetaTagReport,
    pub llm_suggestions: TitleSuggestions,
}

/// Rendered findings from the structural analyzers, in document order
#[derive(Debug, Clone, Serialize)]
pub struct StructuralIntegrity {
    pub headings: Vec<String>,
    pub semantics: Vec<String>,
}

/// Synthesized schema recommendations; None when the markup already exists
/// (or, for FAQ, when no usable Q&A pair was generated)
#[derive(Debug, Clone, Serialize)]
pub struct Recommendations {
    pub article_schema: Option<String>,
    pub faq_schema: Option<String>,
}

/// The full report for one successfully fetched URL
#[derive(Debug, Clone, Serialize)]
pub struct PageReport {
    pub url: String,
    pub title: String,
    pub meta_analysis: MetaAnalysis,
    pub structural_integrity: StructuralIntegrity,
    pub readability: ReadabilityReport,
    pub topical_gaps: TopicalGapsReport,
    pub existing_schema: SchemaPresence,
    pub recommendations: Recommendations,
    pub content_structure: ContentStructureReport,
}

/// Terminal result for one URL
///
/// Serialized untagged: a completed analysis is the full report object,
/// a failed fetch is exactly `{url, error}`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum UrlReport {
    Complete(Box<PageReport>),
    Failed { url: String, error: String },
}

impl UrlReport {
    /// The URL this report covers
    pub fn url(&self) -> &str {
        match self {
            UrlReport::Complete(report) => &report.url,
            UrlReport::Failed { url, .. } => url,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UrlReport::Failed { .. })
    }
}
