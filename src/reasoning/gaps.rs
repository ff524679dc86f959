//! Topical-gap Q&A discovery

use crate::reasoning::ReasoningClient;
use crate::text::truncate_chars;
use crate::ReasoningError;
use serde::Serialize;
use std::time::Duration;

const GAP_TEMPERATURE: f64 = 0.7;
const GAP_TIMEOUT: Duration = Duration::from_secs(30);
const GAP_CONTENT_LIMIT: usize = 4000;

/// A question/answer pair suitable for an FAQ section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QnaPair {
    pub question: String,
    pub answer: String,
}

impl QnaPair {
    /// A pair is usable only when both sides are non-empty
    pub fn is_usable(&self) -> bool {
        !self.question.is_empty() && !self.answer.is_empty()
    }
}

/// Successful topical-gap discovery payload
#[derive(Debug, Clone)]
pub struct TopicalGaps {
    /// The model's raw completion text
    pub raw_text: String,
    /// Pairs parsed from the completion, in order, including any with an
    /// unfilled answer
    pub pairs: Vec<QnaPair>,
}

/// Asks the reasoning service for missing sub-topics as Q&A pairs
///
/// The prompt carries the page title and up to the first 4000 characters
/// of main-content text, and instructs the model to emit only lines
/// prefixed "Q:" or "A:".
pub async fn discover_topical_gaps(
    client: &ReasoningClient,
    title: &str,
    content: &str,
) -> Result<TopicalGaps, ReasoningError> {
    let prompt = build_gap_prompt(title, content);
    let raw_text = client
        .complete(&prompt, GAP_TEMPERATURE, GAP_TIMEOUT)
        .await?;
    let pairs = parse_qna_lines(&raw_text);
    Ok(TopicalGaps { raw_text, pairs })
}

fn build_gap_prompt(title: &str, content: &str) -> String {
    format!(
        "An article's main topic is \"{title}\".\n\
         1. Identify key sub-topics or common questions related to this topic that are \
         missing from the article text provided below.\n\
         2. Based only on the missing topics, generate 3-5 relevant question and answer \
         pairs suitable for an FAQ section.\n\
         3. Format the output as a clean list, with each question on a line starting \
         with \"Q:\" and each answer on a line starting with \"A:\". Do not add any \
         other text or introduction.\n\n\
         ARTICLE TEXT TO ANALYZE:\n{content}",
        title = title,
        content = truncate_chars(content, GAP_CONTENT_LIMIT),
    )
}

/// Parses "Q:"/"A:" prefixed lines into ordered pairs
///
/// A small two-state scanner: a "Q:" line opens a new pair and arms the
/// answer slot; the next "A:" line fills it. Lines matching neither
/// prefix, and "A:" lines with no open pair, are ignored. Pure function,
/// independent of the network call.
pub fn parse_qna_lines(text: &str) -> Vec<QnaPair> {
    let mut pairs: Vec<QnaPair> = Vec::new();
    let mut awaiting_answer = false;

    for line in text.lines() {
        let line = line.trim();
        if let Some(question) = line.strip_prefix("Q:") {
            pairs.push(QnaPair {
                question: question.trim().to_string(),
                answer: String::new(),
            });
            awaiting_answer = true;
        } else if let Some(answer) = line.strip_prefix("A:") {
            if awaiting_answer {
                if let Some(pair) = pairs.last_mut() {
                    pair.answer = answer.trim().to_string();
                }
                awaiting_answer = false;
            }
        }
    }

    pairs
}
