use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::application::use_cases::text::truncate_chars;

/// A topic token is a letter followed by three or more word characters or
/// hyphens, i.e. tokens of length >= 4 that start alphabetic.
static TOPIC_TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9_\-]{3,}").unwrap());

/// Naive topic extraction: scan left to right, dedupe case-insensitively
/// keeping the first-seen casing and order, stop at `max_topics`. Non-empty
/// text that yields no tokens falls back to its first 50 characters.
pub fn extract_topics(text: &str, max_topics: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut topics = Vec::new();
    for token in TOPIC_TOKEN_PATTERN.find_iter(text) {
        let word = token.as_str();
        if seen.insert(word.to_lowercase()) {
            topics.push(word.to_string());
        }
        if topics.len() >= max_topics {
            break;
        }
    }

    if topics.is_empty() {
        topics.push(truncate_chars(text, 50).to_string());
    }
    topics
}
