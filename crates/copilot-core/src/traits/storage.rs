use crate::errors::StorageError;
use crate::models::{Document, FileType, SearchResult};

/// Document index with brute-force vector search.
///
/// `store` must be atomic per document as seen by concurrent searchers.
pub trait IDocumentStore: Send + Sync {
    fn store(&self, document: Document) -> Result<(), StorageError>;

    /// Number of stored documents.
    fn count(&self) -> Result<usize, StorageError>;

    /// Number of stored chunks that carry an embedding.
    fn searchable_chunk_count(&self) -> Result<usize, StorageError>;

    /// Ranked hits with `score >= min_score`, at most `top_k`, restricted to
    /// `file_types` unless it is empty.
    fn search_filtered(
        &self,
        query: &[f32],
        top_k: usize,
        min_score: f64,
        file_types: &[FileType],
    ) -> Result<Vec<SearchResult>, StorageError>;

    fn search(
        &self,
        query: &[f32],
        top_k: usize,
        min_score: f64,
    ) -> Result<Vec<SearchResult>, StorageError> {
        self.search_filtered(query, top_k, min_score, &[])
    }
}
