//! Content-structure (heading) suggestions

use crate::reasoning::ReasoningClient;
use crate::text::{collapse_whitespace, truncate_chars};
use crate::ReasoningError;
use std::time::Duration;

const STRUCTURE_TEMPERATURE: f64 = 0.5;
const STRUCTURE_TIMEOUT: Duration = Duration::from_secs(45);
const STRUCTURE_CONTENT_LIMIT: usize = 6000;

/// Asks the reasoning service for an H2/H3 outline of long-form text
///
/// The content is whitespace-collapsed and capped at 6000 characters.
/// The model is asked for major-break headings with the first sentence of
/// the following paragraph as a location anchor, and told to keep
/// suggested headings adequately spaced. The completion is returned raw.
pub async fn suggest_content_structure(
    client: &ReasoningClient,
    content: &str,
) -> Result<String, ReasoningError> {
    let prompt = build_structure_prompt(content);
    client
        .complete(&prompt, STRUCTURE_TEMPERATURE, STRUCTURE_TIMEOUT)
        .await
}

fn build_structure_prompt(content: &str) -> String {
    let cleaned = collapse_whitespace(content);
    format!(
        "Analyze the following article text, which is long and lacks sufficient \
         headings. Improve its scannability by suggesting headings.\n\n\
         1. Identify major logical breaks where a new, substantial sub-topic begins.\n\
         2. Suggest a concise, descriptive heading for each break. Use H2s for major \
         topics and H3s for sub-topics.\n\
         3. CRITICAL RULE: do not suggest headings that are too close together. Leave \
         at least 1-2 paragraphs of substantial content between each suggested heading.\n\
         4. Present the recommendations as an outline. Do not rewrite the original \
         text. Include the first sentence of the paragraph that follows each heading \
         to identify its location.\n\n\
         Example output:\n\
         ## New Suggested H2\n\
         ### New Suggested H3\n\
         ## Another New Suggested H2\n\n\
         ARTICLE TEXT TO ANALYZE:\n{content}",
        content = truncate_chars(&cleaned, STRUCTURE_CONTENT_LIMIT),
    )
}
