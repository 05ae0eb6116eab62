//! Top-level copilot configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, BackendsConfig, EmbeddingConfig, GenerationConfig, IngestConfig,
    ObservabilityConfig, RetrievalConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`COPILOT_*`, plus `OPENAI_API_KEY`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CopilotConfig {
    pub embedding: EmbeddingConfig,
    pub generation: GenerationConfig,
    pub backends: BackendsConfig,
    pub retrieval: RetrievalConfig,
    pub ingest: IngestConfig,
    pub observability: ObservabilityConfig,
}

impl CopilotConfig {
    /// Load configuration: defaults, then the optional TOML file, then the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `COPILOT_EMBEDDING_DIMENSIONS`, `COPILOT_LOCAL_LLM_URL`, etc.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup. Unparseable values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("COPILOT_OPENAI_API_KEY").or_else(|| lookup("OPENAI_API_KEY")) {
            self.backends.openai_api_key = Some(key);
        }
        if let Some(url) = lookup("COPILOT_OPENAI_BASE_URL") {
            self.backends.openai_base_url = url;
        }
        if let Some(url) = lookup("COPILOT_LOCAL_LLM_URL") {
            self.backends.local_base_url = Some(url);
        }
        if let Some(v) = lookup("COPILOT_EMBEDDING_DIMENSIONS").and_then(|v| v.parse().ok()) {
            self.embedding.dimensions = v;
        }
        if let Some(v) = lookup("COPILOT_CHUNK_MAX_WORDS").and_then(|v| v.parse().ok()) {
            self.ingest.chunk_max_words = v;
        }
        if let Some(dir) = lookup("COPILOT_UPLOADS_DIR") {
            self.ingest.uploads_dir = dir;
        }
        if let Some(level) = lookup("COPILOT_LOG_LEVEL") {
            self.observability.log_level = level;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        if self.embedding.timeout_ms == 0 {
            return Err(invalid("embedding.timeout_ms", "must be greater than 0"));
        }
        if self.generation.timeout_ms == 0 {
            return Err(invalid("generation.timeout_ms", "must be greater than 0"));
        }
        for (field, order) in [
            ("embedding.provider_order", &self.embedding.provider_order),
            ("generation.provider_order", &self.generation.provider_order),
        ] {
            if let Some(unknown) = order
                .iter()
                .find(|name| !defaults::KNOWN_PROVIDERS.contains(&name.as_str()))
            {
                return Err(invalid(field, &format!("unknown provider '{unknown}'")));
            }
        }
        if self.retrieval.default_top_k == 0 {
            return Err(invalid("retrieval.default_top_k", "must be greater than 0"));
        }
        if !(0.0..=1.0).contains(&self.retrieval.default_min_score) {
            return Err(invalid(
                "retrieval.default_min_score",
                "must be between 0.0 and 1.0",
            ));
        }
        if self.ingest.chunk_max_words == 0 {
            return Err(invalid("ingest.chunk_max_words", "must be greater than 0"));
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
