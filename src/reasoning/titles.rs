//! Title tag recommendations

use crate::reasoning::ReasoningClient;
use crate::text::truncate_chars;
use crate::ReasoningError;
use std::time::Duration;

const TITLE_TEMPERATURE: f64 = 0.7;
const TITLE_TIMEOUT: Duration = Duration::from_secs(30);
const TITLE_CONTENT_LIMIT: usize = 2000;

/// Asks the reasoning service for three improved title tags
///
/// The prompt carries the current title, the main `<h1>` text, and up to
/// the first 2000 characters of content. The model is asked for exactly
/// three alternatives of at most 60 characters, one per line, with no
/// surrounding text. The completion is returned raw; no further parsing.
pub async fn recommend_titles(
    client: &ReasoningClient,
    current_title: &str,
    h1_text: &str,
    content: &str,
) -> Result<String, ReasoningError> {
    let prompt = build_title_prompt(current_title, h1_text, content);
    client
        .complete(&prompt, TITLE_TEMPERATURE, TITLE_TIMEOUT)
        .await
}

fn build_title_prompt(current_title: &str, h1_text: &str, content: &str) -> String {
    format!(
        "You are an expert SEO copywriter.\n\
         The current title tag is: \"{current_title}\"\n\
         The main H1 heading is: \"{h1_text}\"\n\n\
         Generate 3 improved, SEO-friendly title tags based on the article's content.\n\n\
         GUIDELINES:\n\
         1. CRITICAL: every title must be 60 characters or less. This is a strict \
         technical limit.\n\
         2. Titles must be compelling for human readers.\n\
         3. Incorporate key entities and semantic concepts from the article text.\n\
         4. Capture the user's intent rather than stuffing keywords.\n\n\
         List only the 3 new title suggestions, each on its own line. \
         Verify each one is 60 characters or less. Do not add any other text.\n\n\
         ARTICLE TEXT SNIPPET FOR CONTEXT:\n{content}",
        current_title = current_title,
        h1_text = h1_text,
        content = truncate_chars(content, TITLE_CONTENT_LIMIT),
    )
}
