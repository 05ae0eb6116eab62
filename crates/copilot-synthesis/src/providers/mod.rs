//! Chat provider registry.
//!
//! Chain order comes from `GenerationConfig::provider_order`. Providers whose
//! backend is not configured are left out.

pub mod chat;

pub use chat::ChatCompletionProvider;

use copilot_core::config::{defaults, BackendsConfig, GenerationConfig};
use copilot_core::traits::IGenerationProvider;
use tracing::{debug, info, warn};

/// Build the configured chat providers in chain order.
pub fn create_providers(
    config: &GenerationConfig,
    backends: &BackendsConfig,
) -> Vec<Box<dyn IGenerationProvider>> {
    let mut providers: Vec<Box<dyn IGenerationProvider>> = Vec::new();

    for name in &config.provider_order {
        let created = match name.as_str() {
            defaults::PROVIDER_API if backends.has_remote() => Some(ChatCompletionProvider::remote(
                backends.openai_api_key.clone().unwrap_or_default(),
                &backends.openai_base_url,
                &config.model,
                config.timeout_ms,
            )),
            defaults::PROVIDER_LOCAL if backends.has_local() => Some(ChatCompletionProvider::local(
                backends.local_base_url.as_deref().unwrap_or_default(),
                &config.local_model,
                config.timeout_ms,
            )),
            _ => None,
        };

        match created {
            Some(Ok(provider)) => {
                info!(provider = %name, "generation provider configured");
                providers.push(Box::new(provider));
            }
            Some(Err(e)) => {
                warn!(provider = %name, error = %e, "generation provider could not be built, skipping");
            }
            None => {
                debug!(provider = %name, "generation provider not configured, skipping");
            }
        }
    }

    providers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_configured_means_empty_chain() {
        let providers = create_providers(&GenerationConfig::default(), &BackendsConfig::default());
        assert!(providers.is_empty());
    }

    #[test]
    fn follows_configured_order() {
        let backends = BackendsConfig {
            openai_api_key: Some("sk-test".into()),
            local_base_url: Some("http://127.0.0.1:1234".into()),
            ..BackendsConfig::default()
        };
        let config = GenerationConfig {
            provider_order: vec!["local".into(), "api".into()],
            ..GenerationConfig::default()
        };
        let names: Vec<String> = create_providers(&config, &backends)
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["local", "api"]);
    }

    #[test]
    fn blank_key_skips_remote() {
        let backends = BackendsConfig {
            openai_api_key: Some("   ".into()),
            ..BackendsConfig::default()
        };
        assert!(create_providers(&GenerationConfig::default(), &backends).is_empty());
    }
}
