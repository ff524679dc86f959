//! Report export: JSON, flattened CSV, and a stdout summary

use crate::report::{PageReport, UrlReport};
use chrono::Utc;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Column order for the flattened tabular export
const CSV_HEADER: &str = "url,status,error,title,title_tag_status,title_tag_length,\
meta_description_status,meta_description_length,flesch_reading_ease,heading_findings,\
semantic_findings,title_suggestions,topical_gaps,heading_suggestions,has_article_schema,\
has_faq_schema,article_schema_recommendation,faq_schema_recommendation";

/// Writes the batch results as a pretty-printed JSON array
pub fn write_json_export(reports: &[UrlReport], path: &Path) -> crate::Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Writes the batch results as a flattened CSV table
pub fn write_csv_export(reports: &[UrlReport], path: &Path) -> crate::Result<()> {
    let csv = format_csv(reports);
    let mut file = File::create(path)?;
    file.write_all(csv.as_bytes())?;
    Ok(())
}

/// Flattens batch results to CSV, one row per URL
///
/// List fields are newline-joined inside a single quoted cell; quoting
/// follows RFC 4180 (doubled quotes, cells with separators quoted).
pub fn format_csv(reports: &[UrlReport]) -> String {
    let mut out = String::new();
    out.push_str(CSV_HEADER);
    out.push('\n');

    for report in reports {
        let row = match report {
            UrlReport::Complete(page) => complete_row(page),
            UrlReport::Failed { url, error } => failed_row(url, error),
        };
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

fn complete_row(page: &PageReport) -> Vec<String> {
    let tags = &page.meta_analysis.tags;
    vec![
        escape_csv_field(&page.url),
        "ok".to_string(),
        String::new(),
        escape_csv_field(&page.title),
        tags.title.status.as_str().to_string(),
        tags.title.length.to_string(),
        tags.meta_description.status.as_str().to_string(),
        tags.meta_description.length.to_string(),
        format!("{:.2}", page.readability.flesch_reading_ease),
        escape_csv_field(&page.structural_integrity.headings.join("\n")),
        escape_csv_field(&page.structural_integrity.semantics.join("\n")),
        escape_csv_field(&page.meta_analysis.llm_suggestions.suggestions),
        escape_csv_field(&page.topical_gaps.raw_text),
        escape_csv_field(&page.content_structure.heading_suggestions),
        page.existing_schema.article.to_string(),
        page.existing_schema.faq_page.to_string(),
        escape_csv_field(page.recommendations.article_schema.as_deref().unwrap_or("")),
        escape_csv_field(page.recommendations.faq_schema.as_deref().unwrap_or("")),
    ]
}

fn failed_row(url: &str, error: &str) -> Vec<String> {
    let mut row = vec![
        escape_csv_field(url),
        "failed".to_string(),
        escape_csv_field(error),
    ];
    // Remaining columns stay empty so every row has the full width
    row.resize(18, String::new());
    row
}

/// Quotes a CSV cell when it contains a separator, quote, or line break
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Renders a human-oriented batch summary for stdout
pub fn render_summary(reports: &[UrlReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "=== Pagelens batch summary ({}) ===\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for report in reports {
        match report {
            UrlReport::Complete(page) => {
                out.push_str(&format!(
                    "✓ {} — title {}, readability {:.1}\n",
                    page.url,
                    page.meta_analysis.tags.title.status.as_str(),
                    page.readability.flesch_reading_ease
                ));
            }
            UrlReport::Failed { url, error } => {
                out.push_str(&format!("✗ {} — {}\n", url, error));
            }
        }
    }

    let failed = reports.iter().filter(|r| r.is_failed()).count();
    out.push_str(&format!(
        "\n{} analyzed, {} failed\n",
        reports.len() - failed,
        failed
    ));

    out
}
