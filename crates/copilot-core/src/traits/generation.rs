use crate::errors::GenerationError;

/// One chat-style completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    pub temperature: f64,
    pub max_tokens: Option<u32>,
}

/// Generative text provider.
pub trait IGenerationProvider: Send + Sync {
    /// Run one completion and return the raw assistant text.
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}

impl<T: IGenerationProvider + ?Sized> IGenerationProvider for std::sync::Arc<T> {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        (**self).complete(request)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
