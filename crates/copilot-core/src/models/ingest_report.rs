use serde::{Deserialize, Serialize};

use super::document::Document;

/// A per-file problem that did not stop the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestWarning {
    pub path: String,
    pub message: String,
}

/// Outcome of one ingestion batch. Partial success is the normal case.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngestReport {
    pub documents: Vec<Document>,
    pub warnings: Vec<IngestWarning>,
    /// Files skipped for an unsupported extension.
    pub skipped: usize,
}

impl IngestReport {
    pub fn indexed_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
