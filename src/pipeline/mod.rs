//! Analysis orchestrator
//!
//! Sequences the per-URL pipeline: fetch, parse, run the structural
//! analyzers, issue the three reasoning calls concurrently, synthesize
//! missing schema, and assemble one merged report. A fetch failure
//! short-circuits to an error-only report; a reasoning failure surfaces
//! only in its own slot. Batches fan out one independent pipeline per
//! URL with bounded concurrency and no cross-URL shared state.

use crate::analyzers::{
    analyze_heading_structure, analyze_meta_tags, analyze_readability, audit_semantic_html,
    detect_structured_data, render_findings,
};
use crate::config::Config;
use crate::document::ParsedDocument;
use crate::fetch::{build_fetch_client, fetch_page};
use crate::reasoning::{
    discover_topical_gaps, recommend_titles, suggest_content_structure, ReasoningClient,
};
use crate::report::{
    ContentStructureReport, MetaAnalysis, PageReport, Recommendations, StructuralIntegrity,
    TitleSuggestions, TopicalGapsReport, UrlReport,
};
use crate::schema::{build_article_schema, build_faq_schema};
use crate::{AuditError, BatchError};
use futures::stream::{self, StreamExt};
use reqwest::Client;

/// Title placeholder when the page has none
const FALLBACK_TITLE: &str = "No Title Found";

/// Splits a newline-separated URL submission into a validated list
///
/// Lines are trimmed and empty lines discarded. An empty result and a
/// list exceeding `max_urls` are both rejected, with distinct messages,
/// before any fetch occurs.
pub fn parse_url_list(input: &str, max_urls: usize) -> Result<Vec<String>, BatchError> {
    let urls: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();

    if urls.is_empty() {
        return Err(BatchError::Empty);
    }
    if urls.len() > max_urls {
        return Err(BatchError::TooLarge {
            count: urls.len(),
            max: max_urls,
        });
    }

    Ok(urls)
}

/// Per-URL analysis pipeline with its HTTP and reasoning clients
pub struct Analyzer {
    config: Config,
    fetch_client: Client,
    reasoning: ReasoningClient,
}

impl Analyzer {
    /// Creates an analyzer from configuration and an optional API key
    ///
    /// A missing key does not fail construction: every reasoning-dependent
    /// field degrades to an explicit error marker instead.
    pub fn new(config: Config, api_key: Option<String>) -> Result<Self, AuditError> {
        let fetch_client = build_fetch_client(&config.fetch)?;
        let reasoning = ReasoningClient::new(&config.reasoning, api_key)?;

        Ok(Self {
            config,
            fetch_client,
            reasoning,
        })
    }

    /// Whether a reasoning credential was available at startup
    pub fn has_credentials(&self) -> bool {
        self.reasoning.has_credentials()
    }

    /// Runs the full analysis pipeline for one URL
    ///
    /// Always resolves to a report: a fetch failure yields the error-only
    /// variant, and every other failure is converted to data inside the
    /// report. Never panics, never aborts a sibling pipeline.
    pub async fn analyze_url(&self, url: &str) -> UrlReport {
        tracing::debug!("Analyzing {}", url);

        let markup = match fetch_page(&self.fetch_client, url).await {
            Ok(markup) => markup,
            Err(e) => {
                tracing::warn!("Fetch failed for {}: {}", url, e);
                return UrlReport::Failed {
                    url: url.to_string(),
                    error: e.to_string(),
                };
            }
        };

        let doc = ParsedDocument::parse(&markup);
        let title = doc.title().unwrap_or_else(|| FALLBACK_TITLE.to_string());
        let h1_text = doc.first_h1_text().unwrap_or_else(|| title.clone());
        let content = doc.main_content_text(false);

        // The three reasoning calls run concurrently; the join waits for
        // all of them, and each failure stays in its own slot.
        let (gaps, structure, titles) = tokio::join!(
            discover_topical_gaps(&self.reasoning, &title, &content),
            suggest_content_structure(&self.reasoning, &content),
            recommend_titles(&self.reasoning, &title, &h1_text, &content),
        );

        let meta_tags = analyze_meta_tags(&doc);
        let heading_findings = analyze_heading_structure(&doc);
        let semantic_findings = audit_semantic_html(&doc);
        let readability = analyze_readability(&content);
        let existing_schema = detect_structured_data(&doc);

        let article_schema =
            (!existing_schema.article).then(|| build_article_schema(&doc, url));
        let faq_schema = match &gaps {
            Ok(gaps) if !existing_schema.faq_page => build_faq_schema(&gaps.pairs),
            _ => None,
        };

        UrlReport::Complete(Box::new(PageReport {
            url: url.to_string(),
            title,
            meta_analysis: MetaAnalysis {
                tags: meta_tags,
                llm_suggestions: TitleSuggestions::from_result(titles),
            },
            structural_integrity: StructuralIntegrity {
                headings: render_findings(&heading_findings),
                semantics: render_findings(&semantic_findings),
            },
            readability,
            topical_gaps: TopicalGapsReport::from_result(&gaps),
            existing_schema,
            recommendations: Recommendations {
                article_schema,
                faq_schema,
            },
            content_structure: ContentStructureReport::from_result(structure),
        }))
    }

    /// Analyzes a batch of URLs with bounded concurrency
    ///
    /// Pipelines are mutually independent; failure or slowness in one
    /// never affects a sibling. Results come back in submission order.
    pub async fn analyze_batch(&self, urls: &[String]) -> Vec<UrlReport> {
        tracing::info!(
            "Analyzing {} URLs ({} concurrent)",
            urls.len(),
            self.config.batch.max_concurrent
        );

        stream::iter(urls)
            .map(|url| self.analyze_url(url))
            .buffered(self.config.batch.max_concurrent)
            .collect()
            .await
    }
}
