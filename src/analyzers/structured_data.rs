//! Structured-data (JSON-LD) detection

use crate::document::ParsedDocument;
use serde::Serialize;
use serde_json::Value;

/// Structured-data types already present on the page
///
/// Flags accumulate across all script blocks: once a type is seen it
/// stays detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchemaPresence {
    #[serde(rename = "Article")]
    pub article: bool,
    #[serde(rename = "FAQPage")]
    pub faq_page: bool,
}

/// Scans all `application/ld+json` blocks for Article and FAQPage schema
///
/// Each block is parsed as JSON; malformed blocks are skipped, not fatal.
/// A block may be a single object or carry a `@graph` array of objects.
pub fn detect_structured_data(doc: &ParsedDocument) -> SchemaPresence {
    let mut presence = SchemaPresence::default();

    for block in doc.ld_json_blocks() {
        let value: Value = match serde_json::from_str(&block) {
            Ok(value) => value,
            Err(_) => continue,
        };

        let objects: Vec<&Value> = match value.get("@graph").and_then(Value::as_array) {
            Some(graph) => graph.iter().collect(),
            None => vec![&value],
        };

        for object in objects {
            if type_matches(object, "Article") {
                presence.article = true;
            }
            if type_matches(object, "FAQPage") {
                presence.faq_page = true;
            }
        }
    }

    presence
}

/// Checks whether an object's `@type` names the given schema type
///
/// `@type` may be a string or an array of strings.
fn type_matches(object: &Value, name: &str) -> bool {
    match object.get("@type") {
        Some(Value::String(s)) => s == name,
        Some(Value::Array(items)) => items.iter().any(|item| item.as_str() == Some(name)),
        _ => false,
    }
}
