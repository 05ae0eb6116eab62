//! OpenAI-compatible chat completions client.
//!
//! The remote API is bearer-authenticated at `{base}/chat/completions`; a
//! local server is unauthenticated at `{base}/v1/chat/completions`.

use copilot_core::config::defaults;
use copilot_core::errors::GenerationError;
use copilot_core::traits::{CompletionRequest, IGenerationProvider};
use copilot_core::transport::{blocking_client, endpoint};
use serde::{Deserialize, Serialize};
use tracing::debug;


pub struct ChatCompletionProvider {
    client: reqwest::blocking::Client,
    name: &'static str,
    url: String,
    model: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatCompletionProvider {
    pub fn remote(
        api_key: String,
        base_url: &str,
        model: &str,
        timeout_ms: u64,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            client: blocking_client(defaults::PROVIDER_API, timeout_ms, |provider| {
                GenerationError::ProviderUnavailable { provider }
            })?,
            name: defaults::PROVIDER_API,
            url: endpoint(base_url, "chat/completions"),
            model: model.to_string(),
            api_key: Some(api_key),
        })
    }

    pub fn local(base_url: &str, model: &str, timeout_ms: u64) -> Result<Self, GenerationError> {
        Ok(Self {
            client: blocking_client(defaults::PROVIDER_LOCAL, timeout_ms, |provider| {
                GenerationError::ProviderUnavailable { provider }
            })?,
            name: defaults::PROVIDER_LOCAL,
            url: endpoint(base_url, "v1/chat/completions"),
            model: model.to_string(),
            api_key: None,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn failed(&self, reason: impl ToString) -> GenerationError {
        GenerationError::RequestFailed {
            provider: self.name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl IGenerationProvider for ChatCompletionProvider {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let body = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let mut builder = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }
        let response = builder.send().map_err(|e| self.failed(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GenerationError::BadStatus {
                provider: self.name.to_string(),
                status: status.as_u16(),
            });
        }

        let parsed: ChatResponse = response.json().map_err(|e| GenerationError::Unparseable {
            reason: format!("{}: {e}", self.name),
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or_else(|| GenerationError::EmptyResponse {
                provider: self.name.to_string(),
            })?;

        debug!(provider = self.name, chars = content.len(), "completion received");
        Ok(content)
    }

    fn name(&self) -> &str {
        self.name
    }

    fn is_available(&self) -> bool {
        true
    }
}
