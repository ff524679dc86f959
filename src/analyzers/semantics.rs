//! Semantic HTML audit

use crate::analyzers::Finding;
use crate::document::{element_text, ParsedDocument};

/// Audits basic semantic HTML usage
///
/// Flags every `<strong>`/`<b>` whose trimmed text is empty, and every
/// `<ul>`/`<ol>` whose direct element children include anything other
/// than `<li>`. Text and comment nodes between list items are ignored.
pub fn audit_semantic_html(doc: &ParsedDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    for element in doc.find_all("strong, b") {
        if element_text(element, true).is_empty() {
            findings.push(Finding::warning("found an empty <strong> or <b> tag"));
        }
    }

    for list in doc.find_all("ul, ol") {
        let invalid_children: Vec<&str> = list
            .children()
            .filter_map(|node| node.value().as_element())
            .map(|element| element.name())
            .filter(|name| *name != "li")
            .collect();

        if !invalid_children.is_empty() {
            findings.push(Finding::error(format!(
                "<{}> has invalid direct children: [{}]; only <li> tags are allowed",
                list.value().name(),
                invalid_children.join(", ")
            )));
        }
    }

    if findings.is_empty() {
        findings.push(Finding::ok("basic semantic HTML looks good"));
    }

    findings
}
