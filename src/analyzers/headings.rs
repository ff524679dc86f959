//! Heading hierarchy analysis

use crate::analyzers::Finding;
use crate::document::ParsedDocument;
use crate::text::truncate_chars;

/// Analyzes h1..h6 usage for hierarchy violations
///
/// Produces an error finding when no `<h1>` exists, a warning when more
/// than one does, and an error for every pairwise jump that skips a level
/// (for example `<h1>` directly to `<h3>`). When nothing is wrong, a
/// single success finding is returned.
pub fn analyze_heading_structure(doc: &ParsedDocument) -> Vec<Finding> {
    let mut findings = Vec::new();
    let headings = doc.headings();

    let h1_count = headings.iter().filter(|h| h.level == 1).count();
    if h1_count == 0 {
        findings.push(Finding::error("no <h1> tag found"));
    } else if h1_count > 1 {
        findings.push(Finding::warning(format!(
            "found {} <h1> tags; there should only be one",
            h1_count
        )));
    }

    if headings.len() > 1 {
        let mut last_level = headings[0].level;
        for heading in &headings[1..] {
            if heading.level > last_level + 1 {
                findings.push(Finding::error(format!(
                    "heading hierarchy skips from <h{}> to <h{}>. Text: \"{}...\"",
                    last_level,
                    heading.level,
                    truncate_chars(&heading.text, 50)
                )));
            }
            last_level = heading.level;
        }
    }

    if findings.is_empty() {
        findings.push(Finding::ok("heading structure is logical"));
    }

    findings
}
