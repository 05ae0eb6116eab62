//! Test fixtures for the copilot workspace: fixture data loading, scripted
//! providers, and a minimal blocking HTTP stub for provider tests.

pub mod http_stub;
pub mod providers;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

use copilot_core::models::{
    ChunkRef, DocumentRef, FileType, PageRange, Relevance, SearchResult, Ticket,
};

/// Root directory of the fixture data.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// The sample ticket set.
pub fn sample_tickets() -> Vec<Ticket> {
    load_fixture("tickets.json")
}

/// Directory holding the sample knowledge-base documents.
pub fn sample_docs_dir() -> PathBuf {
    fixture_path("docs")
}

/// A search hit on chunk 0 of a markdown document titled `title`.
pub fn search_hit(title: &str, text: &str, score: f64) -> SearchResult {
    let doc_id = format!("doc-{title}");
    SearchResult {
        document: DocumentRef {
            id: doc_id.clone(),
            title: title.to_string(),
            source_path: format!("docs/{title}"),
            file_type: FileType::Markdown,
            tags: Vec::new(),
        },
        chunk: ChunkRef {
            id: format!("{doc_id}#0"),
            ordinal: 0,
            text: text.to_string(),
            pages: PageRange::for_ordinal(0),
        },
        score,
        relevance: Relevance::from_score(score),
    }
}
