//! Ordered generation providers.
//!
//! A provider counts as failed when its call errors or when its reply does
//! not survive the caller's parser. When a later provider answers after an
//! earlier one failed, a `DegradationEvent` is recorded.

use std::sync::{Mutex, PoisonError};

use copilot_core::config::{BackendsConfig, GenerationConfig};
use copilot_core::errors::GenerationError;
use copilot_core::models::DegradationEvent;
use copilot_core::traits::{CompletionRequest, IGenerationProvider};
use tracing::warn;

use crate::providers;
use crate::COMPONENT;

#[derive(Default)]
pub struct GenerationChain {
    chain: Vec<Box<dyn IGenerationProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl GenerationChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &GenerationConfig, backends: &BackendsConfig) -> Self {
        let mut chain = Self::new();
        for provider in providers::create_providers(config, backends) {
            chain.push(provider);
        }
        chain
    }

    pub fn push(&mut self, provider: Box<dyn IGenerationProvider>) {
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

    /// Run `request` through the chain until a reply parses.
    /// Returns the parsed value and the name of the provider that produced it.
    pub fn complete_with<T>(
        &self,
        request: &CompletionRequest,
        parse: impl Fn(&str) -> Result<T, GenerationError>,
    ) -> Result<(T, String), GenerationError> {
        let mut failures: Vec<String> = Vec::new();

        for provider in &self.chain {
            if !provider.is_available() {
                failures.push(format!("{} unavailable", provider.name()));
                continue;
            }

            match provider.complete(request).and_then(|raw| parse(&raw)) {
                Ok(value) => {
                    if !failures.is_empty() {
                        self.record(DegradationEvent::now(
                            COMPONENT,
                            failures.join("; "),
                            provider.name(),
                        ));
                    }
                    return Ok((value, provider.name().to_string()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "generation provider failed, trying next in chain"
                    );
                    failures.push(format!("{}: {e}", provider.name()));
                }
            }
        }

        if failures.is_empty() {
            return Err(GenerationError::ProviderUnavailable {
                provider: "no generation providers configured".to_string(),
            });
        }
        Err(GenerationError::ChainExhausted {
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
