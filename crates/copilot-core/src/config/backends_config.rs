use serde::{Deserialize, Serialize};

use super::defaults;

/// Connection details for the external AI backends.
///
/// A provider whose connection details are missing is left out of its chain.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendsConfig {
    /// Bearer key for the remote OpenAI-compatible API.
    pub openai_api_key: Option<String>,
    /// Base URL of the remote API, without a trailing slash.
    pub openai_base_url: String,
    /// Base URL of the locally hosted endpoint.
    pub local_base_url: Option<String>,
}

impl BackendsConfig {
    /// Whether the remote API can be called at all.
    pub fn has_remote(&self) -> bool {
        self.openai_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Whether a local endpoint has been configured.
    pub fn has_local(&self) -> bool {
        self.local_base_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

impl Default for BackendsConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: defaults::DEFAULT_OPENAI_BASE_URL.to_string(),
            local_base_url: None,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for BackendsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendsConfig")
            .field(
                "openai_api_key",
                &self.openai_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("openai_base_url", &self.openai_base_url)
            .field("local_base_url", &self.local_base_url)
            .finish()
    }
}
