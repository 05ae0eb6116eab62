//! Provider registry.
//!
//! Chain order comes from `EmbeddingConfig::provider_order`. A provider whose
//! backend is not configured is left out; the hash fallback sits behind
//! the chain in the engine and is always available.

pub mod api_provider;
pub mod hash_fallback;
pub mod local_provider;

pub use api_provider::ApiProvider;
pub use hash_fallback::HashFallback;
pub use local_provider::LocalProvider;

use copilot_core::config::{defaults, BackendsConfig, EmbeddingConfig};
use copilot_core::errors::EmbeddingError;
use copilot_core::traits::IEmbeddingProvider;
use tracing::{debug, info, warn};

/// Build the configured providers in chain order.
pub fn create_providers(
    config: &EmbeddingConfig,
    backends: &BackendsConfig,
) -> Vec<Box<dyn IEmbeddingProvider>> {
    let mut providers: Vec<Box<dyn IEmbeddingProvider>> = Vec::new();

    for name in &config.provider_order {
        let created: Option<Result<Box<dyn IEmbeddingProvider>, EmbeddingError>> =
            match name.as_str() {
                defaults::PROVIDER_API if backends.has_remote() => {
                    let key = backends.openai_api_key.clone().unwrap_or_default();
                    Some(
                        ApiProvider::new(
                            key,
                            &backends.openai_base_url,
                            &config.model,
                            config.dimensions,
                            config.timeout_ms,
                        )
                        .map(|p| Box::new(p) as Box<dyn IEmbeddingProvider>),
                    )
                }
                defaults::PROVIDER_LOCAL if backends.has_local() => {
                    let url = backends.local_base_url.clone().unwrap_or_default();
                    Some(
                        LocalProvider::new(&url, config.dimensions, config.timeout_ms)
                            .map(|p| Box::new(p) as Box<dyn IEmbeddingProvider>),
                    )
                }
                _ => None,
            };

        match created {
            Some(Ok(provider)) => {
                info!(provider = %name, "embedding provider configured");
                providers.push(provider);
            }
            Some(Err(e)) => {
                warn!(provider = %name, error = %e, "embedding provider could not be built, skipping");
            }
            None => {
                debug!(provider = %name, "embedding provider not configured, skipping");
            }
        }
    }

    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_backends_yield_empty_chain() {
        let providers = create_providers(&EmbeddingConfig::default(), &BackendsConfig::default());
        assert!(providers.is_empty());
    }

    #[test]
    fn chain_follows_configured_order() {
        let config = EmbeddingConfig {
            provider_order: vec!["local".into(), "api".into()],
            ..Default::default()
        };
        let backends = BackendsConfig {
            openai_api_key: Some("sk-test".into()),
            local_base_url: Some("http://127.0.0.1:9".into()),
            ..Default::default()
        };
        let names: Vec<String> = create_providers(&config, &backends)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["local", "api"]);
    }

    #[test]
    fn blank_api_key_leaves_remote_out() {
        let backends = BackendsConfig {
            openai_api_key: Some("   ".into()),
            ..Default::default()
        };
        let providers = create_providers(&EmbeddingConfig::default(), &backends);
        assert!(providers.is_empty());
    }
}
