//! Top-level error type. Aggregates subsystem errors via `From` conversions.

use super::error_code::{self, ErrorCode};
use super::{ConfigError, EmbeddingError, ExtractionError, GenerationError, StorageError};

/// Errors surfaced to callers of the copilot.
///
/// Only structural and lookup failures reach a caller. Embedding and generation
/// variants exist so provider code can use `?`, but the engine and the
/// synthesizer absorb them before they cross the public interface.
#[derive(Debug, thiserror::Error)]
pub enum CopilotError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },
}

impl CopilotError {
    pub fn not_found(entity: &str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity: entity.to_string(),
            id: id.into(),
        }
    }

    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl ErrorCode for CopilotError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::NOT_FOUND,
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Extraction(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::Generation(e) => e.error_code(),
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
        }
    }
}

pub type CopilotResult<T> = Result<T, CopilotError>;
