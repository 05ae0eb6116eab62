use super::error_code::{self, ErrorCode};

/// Embedding provider errors. They never leave the embedding engine:
/// the engine resolves them through the deterministic fallback.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("request to {provider} failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("{provider} returned status {status}")]
    BadStatus { provider: String, status: u16 },

    #[error("malformed response from {provider}: {reason}")]
    MalformedResponse { provider: String, reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("all embedding providers failed: {failures}")]
    ChainExhausted { failures: String },
}

impl ErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            _ => error_code::EMBEDDING_UNAVAILABLE,
        }
    }
}
