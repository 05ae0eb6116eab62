//! Remote embedding provider for OpenAI-compatible `/embeddings` endpoints.

use copilot_core::errors::EmbeddingError;
use copilot_core::traits::IEmbeddingProvider;
use copilot_core::transport::{blocking_client, endpoint};
use serde::{Deserialize, Serialize};
use tracing::debug;


const NAME: &str = "api";

/// Bearer-authenticated embeddings API client.
pub struct ApiProvider {
    client: reqwest::blocking::Client,
    api_key: String,
    url: String,
    model: String,
    dimensions: usize,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: EmbedInput<'a>,
    dimensions: usize,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EmbedInput<'a> {
    One(&'a str),
    Many(&'a [String]),
}

#[derive(Deserialize)]
pub(crate) struct EmbedResponse {
    pub(crate) data: Vec<EmbedData>,
}

#[derive(Deserialize)]
pub(crate) struct EmbedData {
    #[serde(default)]
    pub(crate) index: Option<usize>,
    pub(crate) embedding: Vec<f32>,
}

impl EmbedResponse {
    /// Vectors in request order.
    pub(crate) fn into_vectors(mut self) -> Vec<Vec<f32>> {
        if self.data.iter().all(|d| d.index.is_some()) {
            self.data.sort_by_key(|d| d.index);
        }
        self.data.into_iter().map(|d| d.embedding).collect()
    }
}

impl ApiProvider {
    pub fn new(
        api_key: String,
        base_url: &str,
        model: &str,
        dimensions: usize,
        timeout_ms: u64,
    ) -> Result<Self, EmbeddingError> {
        Ok(Self {
            client: blocking_client(NAME, timeout_ms, |provider| {
                EmbeddingError::ProviderUnavailable { provider }
            })?,
            api_key,
            url: endpoint(base_url, "embeddings"),
            model: model.to_string(),
            dimensions,
        })
    }

    fn request(&self, input: EmbedInput<'_>, expected: usize) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let body = EmbedRequest {
            model: &self.model,
            input,
            dimensions: self.dimensions,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
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

        let parsed: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::MalformedResponse {
                    provider: NAME.to_string(),
                    reason: e.to_string(),
                })?;

        let vectors = parsed.into_vectors();
        if vectors.len() != expected {
            return Err(EmbeddingError::MalformedResponse {
                provider: NAME.to_string(),
                reason: format!("expected {expected} embeddings, got {}", vectors.len()),
            });
        }
        debug!(count = vectors.len(), "api embeddings received");
        Ok(vectors)
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut vectors = self.request(EmbedInput::One(text), 1)?;
        vectors.pop().ok_or_else(|| EmbeddingError::MalformedResponse {
            provider: NAME.to_string(),
            reason: "empty data".to_string(),
        })
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request(EmbedInput::Many(texts), texts.len())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_vectors_follow_index_order() {
        let raw = r#"{"data":[
            {"index":1,"embedding":[0.0,1.0]},
            {"index":0,"embedding":[1.0,0.0]}
        ]}"#;
        let parsed: EmbedResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.into_vectors(), vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
    }

    #[test]
    fn single_input_serializes_as_string() {
        let body = EmbedRequest {
            model: "m",
            input: EmbedInput::One("hello"),
            dimensions: 8,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["input"], "hello");
        assert_eq!(json["dimensions"], 8);
    }
}
