use super::error_code::{self, ErrorCode};

/// Generative provider errors. They never leave the synthesizer:
/// the synthesizer resolves them through the rule-based fallback.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("request to {provider} failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("{provider} returned status {status}")]
    BadStatus { provider: String, status: u16 },

    #[error("{provider} returned no choices")]
    EmptyResponse { provider: String },

    #[error("unparseable generation output: {reason}")]
    Unparseable { reason: String },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("all generation providers failed: {failures}")]
    ChainExhausted { failures: String },
}

impl ErrorCode for GenerationError {
    fn error_code(&self) -> &'static str {
        error_code::GENERATION_UNAVAILABLE
    }
}
