use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval defaults applied when a caller leaves `top_k` / `min_score` unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub default_top_k: usize,
    pub default_min_score: f64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: defaults::DEFAULT_TOP_K,
            default_min_score: defaults::DEFAULT_MIN_SCORE,
        }
    }
}
