use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider chain, tried in order: "api", "local".
    pub provider_order: Vec<String>,
    /// Dimensionality D shared by every stored and query vector.
    pub dimensions: usize,
    /// Model name sent to the remote embeddings API.
    pub model: String,
    /// Per-request timeout for embedding calls.
    pub timeout_ms: u64,
    /// L1 in-memory cache max entries. 0 disables the cache.
    pub l1_cache_size: u64,
    /// Time-to-live of cached vectors.
    pub cache_ttl_secs: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider_order: vec![
                defaults::PROVIDER_API.to_string(),
                defaults::PROVIDER_LOCAL.to_string(),
            ],
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
        }
    }
}
