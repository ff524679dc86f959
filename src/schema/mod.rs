//! Structured-data (JSON-LD) synthesis
//!
//! Builds Article and FAQPage schema.org representations from parsed
//! document facts and generated Q&A pairs. The orchestrator only invokes
//! these when the corresponding markup is absent from the page.

use crate::document::ParsedDocument;
use crate::reasoning::QnaPair;
use serde_json::json;

/// Headline used when the page has no `<h1>` to borrow
const FALLBACK_HEADLINE: &str = "No H1 Title Found";

/// Builds a basic Article JSON-LD document for the page
///
/// The headline is the first `<h1>` text when present, otherwise a fixed
/// placeholder. The `mainEntityOfPage` always references the input URL.
pub fn build_article_schema(doc: &ParsedDocument, url: &str) -> String {
    let headline = doc
        .first_h1_text()
        .unwrap_or_else(|| FALLBACK_HEADLINE.to_string());

    let schema = json!({
        "@context": "https://schema.org",
        "@type": "Article",
        "headline": headline,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
    });

    // json! never produces a non-serializable value
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Builds an FAQPage JSON-LD document from generated Q&A pairs
///
/// Pairs with an empty question or answer are dropped. Returns None when
/// no usable pair remains, so callers can skip the recommendation field
/// entirely.
pub fn build_faq_schema(pairs: &[QnaPair]) -> Option<String> {
    let main_entity: Vec<_> = pairs
        .iter()
        .filter(|pair| pair.is_usable())
        .map(|pair| {
            json!({
                "@type": "Question",
                "name": pair.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": pair.answer,
                },
            })
        })
        .collect();

    if main_entity.is_empty() {
        return None;
    }

    let schema = json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": main_entity,
    });

    Some(serde_json::to_string_pretty(&schema).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn pair(q: &str, a: &str) -> QnaPair {
        QnaPair {
            question: q.to_string(),
            answer: a.to_string(),
        }
    }

    #[test]
    fn test_article_schema_uses_h1() {
        let doc = ParsedDocument::parse("<body><h1>The Headline</h1></body>");
        let schema = build_article_schema(&doc, "https://example.com/post");
        let value: Value = serde_json::from_str(&schema).unwrap();

        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], "The Headline");
        assert_eq!(value["mainEntityOfPage"]["@type"], "WebPage");
        assert_eq!(value["mainEntityOfPage"]["@id"], "https://example.com/post");
    }

    #[test]
    fn test_article_schema_fallback_headline() {
        let doc = ParsedDocument::parse("<body><p>no heading</p></body>");
        let schema = build_article_schema(&doc, "https://example.com/");
        let value: Value = serde_json::from_str(&schema).unwrap();
        assert_eq!(value["headline"], "No H1 Title Found");
    }

    #[test]
    fn test_faq_schema_counts_usable_pairs() {
        let pairs = vec![pair("Q1?", "A1."), pair("Q2?", "A2."), pair("Q3?", "")];
        let schema = build_faq_schema(&pairs).unwrap();
        let value: Value = serde_json::from_str(&schema).unwrap();

        assert_eq!(value["@type"], "FAQPage");
        let entities = value["mainEntity"].as_array().unwrap();
        assert_eq!(entities.len(), 2);
        assert_eq!(entities[0]["name"], "Q1?");
        assert_eq!(entities[0]["acceptedAnswer"]["text"], "A1.");
    }

    #[test]
    fn test_faq_schema_none_when_no_usable_pair() {
        let pairs = vec![pair("Q?", ""), pair("", "A.")];
        assert_eq!(build_faq_schema(&pairs), None);
    }

    #[test]
    fn test_faq_schema_none_for_empty_input() {
        assert_eq!(build_faq_schema(&[]), None);
    }
}
