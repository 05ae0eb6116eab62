use serde::{Deserialize, Serialize};

use super::defaults;

/// Generative backend configuration for solution synthesis and triage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Provider chain, tried in order: "api", "local".
    pub provider_order: Vec<String>,
    /// Chat model for the remote API.
    pub model: String,
    /// Model name sent to the local endpoint.
    pub local_model: String,
    pub solution_temperature: f64,
    pub triage_temperature: f64,
    pub triage_max_tokens: u32,
    /// Per-request timeout for chat completion calls.
    pub timeout_ms: u64,
    /// Try the generative tier before keyword triage.
    pub generative_triage: bool,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            provider_order: vec![
                defaults::PROVIDER_API.to_string(),
                defaults::PROVIDER_LOCAL.to_string(),
            ],
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            local_model: defaults::DEFAULT_LOCAL_GENERATION_MODEL.to_string(),
            solution_temperature: defaults::DEFAULT_SOLUTION_TEMPERATURE,
            triage_temperature: defaults::DEFAULT_TRIAGE_TEMPERATURE,
            triage_max_tokens: defaults::DEFAULT_TRIAGE_MAX_TOKENS,
            timeout_ms: defaults::DEFAULT_GENERATION_TIMEOUT_MS,
            generative_triage: true,
        }
    }
}
