//! Readability scoring
//!
//! Implements the Flesch Reading Ease formula over extracted page text:
//!
//! ```text
//! 206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)
//! ```
//!
//! Word, sentence, and syllable counts use deterministic heuristics; no
//! external calls are made.

use serde::Serialize;

/// Readability portion of the page report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    pub flesch_reading_ease: f64,
}

/// Scores the given text for readability
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    ReadabilityReport {
        flesch_reading_ease: flesch_reading_ease(text),
    }
}

/// Computes the Flesch Reading Ease score
///
/// Returns 0.0 for text with no words. Sentence count is floored at one
/// so fragments without terminal punctuation still score.
pub fn flesch_reading_ease(text: &str) -> f64 {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return 0.0;
    }

    let word_count = words.len() as f64;
    let sentence_count = count_sentences(text) as f64;
    let syllable_count: usize = words.iter().map(|w| count_syllables(w)).sum();

    206.835 - 1.015 * (word_count / sentence_count) - 84.6 * (syllable_count as f64 / word_count)
}

/// Counts sentences as runs of terminal punctuation, floored at one
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut in_terminator = false;
    for c in text.chars() {
        let terminal = matches!(c, '.' | '!' | '?');
        if terminal && !in_terminator {
            count += 1;
        }
        in_terminator = terminal;
    }
    count.max(1)
}

/// Estimates syllables in a word by counting vowel groups
///
/// The letters a, e, i, o, u, y open a group; a trailing silent 'e' is
/// discounted when another group exists. Always at least one.
fn count_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if letters.is_empty() {
        return 0;
    }

    let mut groups = 0;
    let mut in_group = false;
    for &c in &letters {
        let vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    if groups > 1 && letters.last() == Some(&'e') {
        groups -= 1;
    }

    groups.max(1)
}
