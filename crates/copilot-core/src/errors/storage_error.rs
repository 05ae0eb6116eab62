use super::error_code::{self, ErrorCode};

/// Document store errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("document store lock poisoned during {operation}")]
    LockPoisoned { operation: String },

    #[error("embedding dimension mismatch in document {document_id}: expected {expected}, got {actual}")]
    DimensionMismatch {
        document_id: String,
        expected: usize,
        actual: usize,
    },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        error_code::STORAGE_ERROR
    }
}
