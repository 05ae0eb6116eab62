//! Document summary and tag extraction.

use copilot_core::constants::TAG_VOCABULARY;

/// First `max_chars` characters, with `...` appended when the text was longer.
pub fn summarize(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &content[..byte_idx]),
        None => content.to_string(),
    }
}

/// Vocabulary keywords found in the content, in vocabulary order.
pub fn extract_tags(content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    TAG_VOCABULARY
        .iter()
        .filter(|keyword| lower.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
