//! Fallback chain for embedding generation.
//!
//! Providers are tried in order. Every provider failure is logged; when a
//! later provider succeeds after an earlier one failed, a `DegradationEvent`
//! is recorded. Vectors of the wrong dimensionality count as failures.

use std::sync::{Mutex, PoisonError};

use copilot_core::errors::EmbeddingError;
use copilot_core::models::DegradationEvent;
use copilot_core::traits::IEmbeddingProvider;
use tracing::warn;

use crate::COMPONENT;

/// Ordered embedding providers plus the events raised while falling through them.
pub struct DegradationChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
    expected_dims: usize,
    events: Mutex<Vec<DegradationEvent>>,
}

impl DegradationChain {
    pub fn new(expected_dims: usize) -> Self {
        Self {
            chain: Vec::new(),
            expected_dims,
            events: Mutex::new(Vec::new()),
        }
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.chain.iter().map(|p| p.name()).collect()
    }

    /// Embed one text with the first provider that answers correctly.
    pub fn embed(&self, text: &str) -> Result<(Vec<f32>, &str), EmbeddingError> {
        self.try_chain(|provider| {
            let vector = provider.embed(text)?;
            validate_dimensions(&vector, self.expected_dims)?;
            Ok(vector)
        })
    }

    /// Embed a batch with the first provider that answers correctly for every text.
    pub fn embed_batch(&self, texts: &[String]) -> Result<(Vec<Vec<f32>>, &str), EmbeddingError> {
        self.try_chain(|provider| {
            let vectors = provider.embed_batch(texts)?;
            if vectors.len() != texts.len() {
                return Err(EmbeddingError::MalformedResponse {
                    provider: provider.name().to_string(),
                    reason: format!("expected {} embeddings, got {}", texts.len(), vectors.len()),
                });
            }
            for vector in &vectors {
                validate_dimensions(vector, self.expected_dims)?;
            }
            Ok(vectors)
        })
    }

    fn try_chain<T>(
        &self,
        attempt: impl Fn(&dyn IEmbeddingProvider) -> Result<T, EmbeddingError>,
    ) -> Result<(T, &str), EmbeddingError> {
        let mut failures: Vec<String> = Vec::new();

        for provider in &self.chain {
            let provider = provider.as_ref();
            if !provider.is_available() {
                failures.push(format!("{} unavailable", provider.name()));
                continue;
            }

            match attempt(provider) {
                Ok(value) => {
                    if !failures.is_empty() {
                        self.record(DegradationEvent::now(
                            COMPONENT,
                            failures.join("; "),
                            provider.name(),
                        ));
                    }
                    return Ok((value, provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    failures.push(format!("{}: {e}", provider.name()));
                }
            }
        }

        if failures.is_empty() {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: "no embedding providers configured".to_string(),
            });
        }
        Err(EmbeddingError::ChainExhausted {
            failures: failures.join("; "),
        })
    }

    pub fn record(&self, event: DegradationEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }

    /// Take all recorded events, oldest first.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

/// A vector must have exactly `expected` components.
pub fn validate_dimensions(vector: &[f32], expected: usize) -> Result<(), EmbeddingError> {
    if vector.len() != expected {
        return Err(EmbeddingError::DimensionMismatch {
            expected,
            actual: vector.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_fixtures::providers::{FailingEmbedder, FixedEmbedder};

    #[test]
    fn first_success_wins_without_event() {
        let mut chain = DegradationChain::new(3);
        chain.push(Box::new(FixedEmbedder::new("a", vec![1.0, 0.0, 0.0])));
        chain.push(Box::new(FixedEmbedder::new("b", vec![0.0, 1.0, 0.0])));

        let (vector, provider) = chain.embed("x").unwrap();
        assert_eq!(vector, vec![1.0, 0.0, 0.0]);
        assert_eq!(provider, "a");
        assert!(chain.drain_events().is_empty());
    }

    #[test]
    fn falls_through_and_records_event() {
        let mut chain = DegradationChain::new(3);
        chain.push(Box::new(FailingEmbedder::new("api", 3)));
        chain.push(Box::new(FixedEmbedder::new("local", vec![0.0, 0.0, 1.0])));

        let (_, provider) = chain.embed("x").unwrap();
        assert_eq!(provider, "local");

        let events = chain.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].component, "embedding");
        assert_eq!(events[0].fallback_used, "local");
        assert!(events[0].failure.contains("api"));
        assert!(chain.drain_events().is_empty());
    }

    #[test]
    fn wrong_dimensions_count_as_failure() {
        let mut chain = DegradationChain::new(3);
        chain.push(Box::new(FixedEmbedder::new("short", vec![1.0, 0.0])));
        chain.push(Box::new(FixedEmbedder::new("right", vec![1.0, 0.0, 0.0])));

        let (_, provider) = chain.embed("x").unwrap();
        assert_eq!(provider, "right");
    }

    #[test]
    fn all_failing_is_chain_exhausted() {
        let mut chain = DegradationChain::new(3);
        chain.push(Box::new(FailingEmbedder::new("api", 3)));
        chain.push(Box::new(FailingEmbedder::new("local", 3)));

        match chain.embed("x") {
            Err(EmbeddingError::ChainExhausted { failures }) => {
                assert!(failures.contains("api"));
                assert!(failures.contains("local"));
            }
            other => panic!("expected exhaustion, got {other:?}"),
        }
    }

    #[test]
    fn empty_chain_is_unavailable() {
        let chain = DegradationChain::new(3);
        assert!(matches!(
            chain.embed("x"),
            Err(EmbeddingError::ProviderUnavailable { .. })
        ));
    }

    #[test]
    fn batch_goes_to_one_provider() {
        let mut chain = DegradationChain::new(3);
        chain.push(Box::new(FailingEmbedder::new("api", 3)));
        chain.push(Box::new(FixedEmbedder::new("local", vec![0.0, 1.0, 0.0])));

        let texts = vec!["a".to_string(), "b".to_string()];
        let (vectors, provider) = chain.embed_batch(&texts).unwrap();
        assert_eq!(provider, "local");
        assert_eq!(vectors.len(), 2);
    }
}
