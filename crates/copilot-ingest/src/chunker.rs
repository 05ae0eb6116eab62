//! Paragraph-bounded chunking.

use copilot_core::constants::PARAGRAPH_SEPARATOR;

/// Split `text` into chunks of whole paragraphs holding at most `max_words`
/// words each.
///
/// Paragraphs are blank-line separated and trimmed; blank ones are skipped.
/// A paragraph larger than the bound becomes a chunk of its own. Paragraphs
/// in one chunk are joined with a blank line. A `max_words` of 0 acts as 1.
pub fn chunk(text: &str, max_words: usize) -> Vec<String> {
    let max_words = max_words.max(1);
    let normalized = text.replace("\r\n", "\n");

    let mut chunks = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();
    let mut buffer_words = 0usize;

    for paragraph in normalized.split(PARAGRAPH_SEPARATOR) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let words = paragraph.split_whitespace().count();
        if !buffer.is_empty() && buffer_words + words > max_words {
            chunks.push(buffer.join(PARAGRAPH_SEPARATOR));
            buffer.clear();
            buffer_words = 0;
        }
        buffer.push(paragraph);
        buffer_words += words;
    }

    if !buffer.is_empty() {
        chunks.push(buffer.join(PARAGRAPH_SEPARATOR));
    }
    chunks
}
