//! Scripted embedding and generation providers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use copilot_core::errors::{EmbeddingError, GenerationError};
use copilot_core::traits::{CompletionRequest, IEmbeddingProvider, IGenerationProvider};

/// Always fails with a request error.
pub struct FailingEmbedder {
    name: String,
    dims: usize,
    calls: AtomicUsize,
}

impl FailingEmbedder {
    pub fn new(name: &str, dims: usize) -> Self {
        Self {
            name: name.to_string(),
            dims,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::RequestFailed {
            provider: self.name.clone(),
            reason: "simulated outage".to_string(),
        })
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Returns the same vector for every text and counts calls.
pub struct FixedEmbedder {
    name: String,
    vector: Vec<f32>,
    calls: AtomicUsize,
}

impl FixedEmbedder {
    pub fn new(name: &str, vector: Vec<f32>) -> Self {
        Self {
            name: name.to_string(),
            vector,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IEmbeddingProvider for FixedEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.vector.clone())
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Bag-of-keywords embedder: component `i` is 1.0 when the lowercased text
/// contains `vocabulary[i]`. Texts without any keyword map to the zero vector.
pub struct KeywordEmbedder {
    vocabulary: Vec<String>,
}

impl KeywordEmbedder {
    pub fn new(vocabulary: &[&str]) -> Self {
        Self {
            vocabulary: vocabulary.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    pub fn vector_for(&self, text: &str) -> Vec<f32> {
        let lower = text.to_lowercase();
        self.vocabulary
            .iter()
            .map(|w| if lower.contains(w.as_str()) { 1.0 } else { 0.0 })
            .collect()
    }
}

impl IEmbeddingProvider for KeywordEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vector_for(text))
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }

    fn name(&self) -> &str {
        "keyword"
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Always fails with a request error.
pub struct FailingGenerator {
    name: String,
    calls: AtomicUsize,
}

impl FailingGenerator {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IGenerationProvider for FailingGenerator {
    fn complete(&self, _request: &CompletionRequest) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(GenerationError::RequestFailed {
            provider: self.name.clone(),
            reason: "simulated outage".to_string(),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// Replies with a fixed text and remembers every request it received.
pub struct ScriptedGenerator {
    name: String,
    reply: String,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedGenerator {
    pub fn new(name: &str, reply: &str) -> Self {
        Self {
            name: name.to_string(),
            reply: reply.to_string(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl IGenerationProvider for ScriptedGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}
