//! Small text helpers shared by the analyzers and prompt builders

/// Truncates a string to at most `max_chars` characters
///
/// Operates on characters rather than bytes so multi-byte text never
/// splits mid-codepoint.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Collapses all runs of whitespace into single spaces and trims the ends
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
