use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Trims the input and collapses every run of whitespace into a single space.
/// Empty input yields an empty string.
pub fn normalize_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    WHITESPACE_RUN_PATTERN.replace_all(trimmed, " ").to_string()
}

/// Returns at most `max_chars` characters of `text`, cutting on a char
/// boundary so multibyte input never panics.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
