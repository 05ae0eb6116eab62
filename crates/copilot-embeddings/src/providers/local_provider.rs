//! Locally hosted embedding endpoint (`POST {base}/embeddings` with `{"input": ...}`).

use copilot_core::errors::EmbeddingError;
use copilot_core::traits::IEmbeddingProvider;
use copilot_core::transport::{blocking_client, endpoint};
use serde::{Deserialize, Serialize};

use super::api_provider::EmbedResponse;

const NAME: &str = "local";

pub struct LocalProvider {
    client: reqwest::blocking::Client,
    url: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct LocalEmbedRequest<'a> {
    input: &'a str,
}

/// Local servers answer either with a bare vector or the OpenAI shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocalEmbedResponse {
    Bare { embedding: Vec<f32> },
    OpenAi(EmbedResponse),
}

impl LocalProvider {
    pub fn new(base_url: &str, dimensions: usize, timeout_ms: u64) -> Result<Self, EmbeddingError> {
        Ok(Self {
            client: blocking_client(NAME, timeout_ms, |provider| {
                EmbeddingError::ProviderUnavailable { provider }
            })?,
            url: endpoint(base_url, "embeddings"),
            dimensions,
        })
    }
}

fn extract_vector(response: LocalEmbedResponse) -> Result<Vec<f32>, EmbeddingError> {
    let vector = match response {
        LocalEmbedResponse::Bare { embedding } => embedding,
        LocalEmbedResponse::OpenAi(resp) => resp.into_vectors().into_iter().next().unwrap_or_default(),
    };
    if vector.is_empty() {
        return Err(EmbeddingError::MalformedResponse {
            provider: NAME.to_string(),
            reason: "empty embedding".to_string(),
        });
    }
    Ok(vector)
}

impl IEmbeddingProvider for LocalProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let response = self
            .client
            .post(&self.url)
            .json(&LocalEmbedRequest { input: text })
            .send()
            .map_err(|e| EmbeddingError::RequestFailed {
                provider: NAME.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::BadStatus {
                provider: NAME.to_string(),
                status: status.as_u16(),
            });
        }

        let parsed: LocalEmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::MalformedResponse {
                    provider: NAME.to_string(),
                    reason: e.to_string(),
                })?;
        extract_vector(parsed)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        NAME
    }

    fn is_available(&self) -> bool {
        true
    }
}
