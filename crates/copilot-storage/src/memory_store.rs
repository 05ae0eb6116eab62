//! `RwLock`-guarded in-memory document store.

use std::sync::{Arc, RwLock};

use copilot_core::config::ReingestPolicy;
use copilot_core::errors::StorageError;
use copilot_core::models::{Document, FileType, SearchResult};
use copilot_core::traits::IDocumentStore;
use tracing::debug;

use crate::search;

/// Documents are built outside the lock and published with a single push,
/// so a searcher sees a document either completely or not at all.
pub struct InMemoryDocumentStore {
    documents: RwLock<Vec<Arc<Document>>>,
    policy: ReingestPolicy,
    dimensions: Option<usize>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new(ReingestPolicy::default())
    }
}

impl InMemoryDocumentStore {
    pub fn new(policy: ReingestPolicy) -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            policy,
            dimensions: None,
        }
    }

    /// Reject documents whose non-empty embeddings are not `dimensions` long.
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Snapshot of the stored documents, in insertion order.
    pub fn documents(&self) -> Result<Vec<Arc<Document>>, StorageError> {
        Ok(self.read("documents")?.clone())
    }

    fn check_dimensions(&self, document: &Document) -> Result<(), StorageError> {
        let Some(expected) = self.dimensions else {
            return Ok(());
        };
        match document
            .searchable_chunks()
            .find(|c| c.embedding.len() != expected)
        {
            Some(chunk) => Err(StorageError::DimensionMismatch {
                document_id: document.id.clone(),
                expected,
                actual: chunk.embedding.len(),
            }),
            None => Ok(()),
        }
    }

    fn read(
        &self,
        operation: &str,
    ) -> Result<std::sync::RwLockReadGuard<'_, Vec<Arc<Document>>>, StorageError> {
        self.documents.read().map_err(|_| StorageError::LockPoisoned {
            operation: operation.to_string(),
        })
    }
}

impl IDocumentStore for InMemoryDocumentStore {
    fn store(&self, document: Document) -> Result<(), StorageError> {
        self.check_dimensions(&document)?;
        let document = Arc::new(document);

        let mut documents = self
            .documents
            .write()
            .map_err(|_| StorageError::LockPoisoned {
                operation: "store".to_string(),
            })?;

        if self.policy == ReingestPolicy::ReplaceSourcePath {
            let before = documents.len();
            documents.retain(|d| d.source_path != document.source_path);
            let replaced = before - documents.len();
            if replaced > 0 {
                debug!(
                    source_path = %document.source_path,
                    replaced,
                    "replaced previously indexed document"
                );
            }
        }
        documents.push(document);
        Ok(())
    }

    fn count(&self) -> Result<usize, StorageError> {
        Ok(self.read("count")?.len())
    }

    fn searchable_chunk_count(&self) -> Result<usize, StorageError> {
        Ok(self
            .read("searchable_chunk_count")?
            .iter()
            .map(|d| d.searchable_chunks().count())
            .sum())
    }

    fn search_filtered(
        &self,
        query: &[f32],
        top_k: usize,
        min_score: f64,
        file_types: &[FileType],
    ) -> Result<Vec<SearchResult>, StorageError> {
        let documents = self.read("search")?;
        Ok(search::rank(&documents, query, top_k, min_score, file_types))
    }
}
