use serde::{Deserialize, Serialize};

use super::defaults;

/// What the store does when a document with an already indexed source path arrives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReingestPolicy {
    /// Keep the earlier documents and add the new one.
    #[default]
    Append,
    /// Drop earlier documents with the same source path, then add the new one.
    ReplaceSourcePath,
}

/// Ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Word bound per chunk.
    pub chunk_max_words: usize,
    /// Characters kept in a document summary.
    pub summary_chars: usize,
    /// Folder ingested when the caller passes no path.
    pub default_path: String,
    /// Folder uploaded files are written to.
    pub uploads_dir: String,
    pub reingest_policy: ReingestPolicy,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            chunk_max_words: defaults::DEFAULT_CHUNK_MAX_WORDS,
            summary_chars: defaults::DEFAULT_SUMMARY_CHARS,
            default_path: defaults::DEFAULT_DOCS_PATH.to_string(),
            uploads_dir: defaults::DEFAULT_UPLOADS_DIR.to_string(),
            reingest_policy: ReingestPolicy::default(),
        }
    }
}
