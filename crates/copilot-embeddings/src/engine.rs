//! EmbeddingEngine: the main entry point for copilot-embeddings.
//!
//! Cache lookup, then the provider chain, then the hash fallback.
//! `embed` always returns a vector of the configured dimension.

use copilot_core::config::{BackendsConfig, EmbeddingConfig};
use copilot_core::errors::EmbeddingError;
use copilot_core::models::DegradationEvent;
use copilot_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::{content_hash, L1MemoryCache};
use crate::degradation::DegradationChain;
use crate::providers::{self, hash_fallback, HashFallback};
use crate::COMPONENT;

pub struct EmbeddingEngine {
    chain: DegradationChain,
    fallback: HashFallback,
    cache: Option<L1MemoryCache>,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Build the provider chain from configuration.
    pub fn new(config: &EmbeddingConfig, backends: &BackendsConfig) -> Self {
        Self::with_providers(config, providers::create_providers(config, backends))
    }

    /// Build an engine over an explicit provider list (tests, custom backends).
    pub fn with_providers(
        config: &EmbeddingConfig,
        providers: Vec<Box<dyn IEmbeddingProvider>>,
    ) -> Self {
        let mut chain = DegradationChain::new(config.dimensions);
        for provider in providers {
            chain.push(provider);
        }

        let cache = (config.l1_cache_size > 0)
            .then(|| L1MemoryCache::new(config.l1_cache_size, config.cache_ttl_secs));

        info!(
            providers = ?chain.provider_names(),
            dims = config.dimensions,
            cache = cache.is_some(),
            "EmbeddingEngine initialized"
        );

        Self {
            chain,
            fallback: HashFallback::new(config.dimensions),
            cache,
            dimensions: config.dimensions,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.provider_names()
    }

    /// Embed one text. Never fails.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let key = content_hash(text);
        if let Some(vector) = self.cache.as_ref().and_then(|c| c.get(&key)) {
            debug!(hash = %key, "embedding cache hit");
            return vector;
        }

        match self.chain.embed(text) {
            Ok((vector, provider)) => {
                debug!(provider, "embedding produced");
                if let Some(cache) = &self.cache {
                    cache.insert(key, vector.clone());
                }
                vector
            }
            Err(e) => self.fall_back(&e, |f| f.generate(text)),
        }
    }

    /// Embed many texts, preserving order. Never fails.
    pub fn embed_batch(&self, texts: &[String]) -> Vec<Vec<f32>> {
        let keys: Vec<String> = texts.iter().map(|t| content_hash(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = keys
            .iter()
            .map(|k| self.cache.as_ref().and_then(|c| c.get(k)))
            .collect();

        let missing: Vec<usize> = (0..texts.len()).filter(|&i| out[i].is_none()).collect();
        if !missing.is_empty() {
            let pending: Vec<String> = missing.iter().map(|&i| texts[i].clone()).collect();
            let vectors = match self.chain.embed_batch(&pending) {
                Ok((vectors, provider)) => {
                    debug!(provider, count = vectors.len(), "batch embeddings produced");
                    if let Some(cache) = &self.cache {
                        for (&i, vector) in missing.iter().zip(&vectors) {
                            cache.insert(keys[i].clone(), vector.clone());
                        }
                    }
                    vectors
                }
                Err(e) => self.fall_back(&e, |f| {
                    pending.iter().map(|t| f.generate(t)).collect()
                }),
            };
            for (i, vector) in missing.into_iter().zip(vectors) {
                out[i] = Some(vector);
            }
        }

        out.into_iter().map(Option::unwrap_or_default).collect()
    }

    fn fall_back<T>(&self, error: &EmbeddingError, produce: impl FnOnce(&HashFallback) -> T) -> T {
        if self.chain.is_empty() {
            debug!("no embedding providers configured, using hash fallback");
        } else {
            self.chain.record(DegradationEvent::now(
                COMPONENT,
                error.to_string(),
                hash_fallback::NAME,
            ));
        }
        produce(&self.fallback)
    }

    /// Take the degradation events recorded since the last drain.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(EmbeddingEngine::embed(self, text))
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        Ok(EmbeddingEngine::embed_batch(self, texts))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "embedding-engine"
    }

    fn is_available(&self) -> bool {
        true
    }
}
