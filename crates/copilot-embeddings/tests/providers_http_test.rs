use std::time::Duration;

use copilot_core::config::{BackendsConfig, EmbeddingConfig};
use copilot_core::errors::EmbeddingError;
use copilot_core::traits::IEmbeddingProvider;
use copilot_embeddings::{ApiProvider, EmbeddingEngine, HashFallback, LocalProvider};
use test_fixtures::http_stub::{closed_port_url, StubResponse, StubServer};

#[test]
fn api_provider_sends_bearer_model_and_dimensions() {
    let server = StubServer::start(vec![StubResponse::json(
        200,
        r#"{"data":[{"index":0,"embedding":[0.1,0.2,0.3]}]}"#,
    )]);
    let provider = ApiProvider::new(
        "sk-test".into(),
        &format!("{}/v1", server.url()),
        "text-embedding-3-small",
        3,
        5_000,
    )
    .unwrap();

    let vector = provider.embed("reset password").unwrap();
    assert_eq!(vector, vec![0.1, 0.2, 0.3]);

    let requests = server.requests();
    assert_eq!(requests[0].path, "/v1/embeddings");
    assert_eq!(requests[0].header("authorization"), Some("Bearer sk-test"));
    let body = requests[0].json();
    assert_eq!(body["model"], "text-embedding-3-small");
    assert_eq!(body["input"], "reset password");
    assert_eq!(body["dimensions"], 3);
}

#[test]
fn api_provider_maps_error_status() {
    let server = StubServer::start(vec![StubResponse::json(429, r#"{"error":"quota"}"#)]);
    let provider = ApiProvider::new("k".into(), &server.url(), "m", 3, 5_000).unwrap();
    assert!(matches!(
        provider.embed("x"),
        Err(EmbeddingError::BadStatus { status: 429, .. })
    ));
}

#[test]
fn api_provider_rejects_malformed_payload() {
    let server = StubServer::start(vec![StubResponse::json(200, r#"{"unexpected":true}"#)]);
    let provider = ApiProvider::new("k".into(), &server.url(), "m", 3, 5_000).unwrap();
    assert!(matches!(
        provider.embed("x"),
        Err(EmbeddingError::MalformedResponse { .. })
    ));
}

#[test]
fn local_provider_posts_input_only() {
    let server = StubServer::start(vec![StubResponse::json(200, r#"{"embedding":[1.0,0.0]}"#)]);
    let provider = LocalProvider::new(&server.url(), 2, 5_000).unwrap();

    assert_eq!(provider.embed("hello").unwrap(), vec![1.0, 0.0]);
    let requests = server.requests();
    assert_eq!(requests[0].path, "/embeddings");
    assert_eq!(requests[0].header("authorization"), None);
    assert_eq!(requests[0].json()["input"], "hello");
}

#[test]
fn connection_refused_is_request_failure() {
    let provider = LocalProvider::new(&closed_port_url(), 2, 2_000).unwrap();
    assert!(matches!(
        provider.embed("x"),
        Err(EmbeddingError::RequestFailed { .. })
    ));
}

#[test]
fn timeout_is_request_failure() {
    let server = StubServer::start(vec![StubResponse::delayed(
        Duration::from_millis(1_500),
        r#"{"embedding":[1.0,0.0]}"#,
    )]);
    let provider = LocalProvider::new(&server.url(), 2, 200).unwrap();
    assert!(matches!(
        provider.embed("x"),
        Err(EmbeddingError::RequestFailed { .. })
    ));
}

#[test]
fn engine_falls_from_api_to_local_over_http() {
    let api = StubServer::start(vec![StubResponse::json(500, "{}")]);
    let local = StubServer::start(vec![StubResponse::json(200, r#"{"embedding":[0.0,1.0]}"#)]);

    let config = EmbeddingConfig {
        dimensions: 2,
        ..Default::default()
    };
    let backends = BackendsConfig {
        openai_api_key: Some("sk-test".into()),
        openai_base_url: api.url(),
        local_base_url: Some(local.url()),
    };
    let engine = EmbeddingEngine::new(&config, &backends);

    assert_eq!(engine.embed("wifi"), vec![0.0, 1.0]);
    let events = engine.drain_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fallback_used, "local");
}

#[test]
fn engine_with_unreachable_backends_still_embeds() {
    let config = EmbeddingConfig {
        dimensions: 12,
        timeout_ms: 500,
        ..Default::default()
    };
    let backends = BackendsConfig {
        openai_api_key: Some("sk-test".into()),
        openai_base_url: closed_port_url(),
        local_base_url: Some(closed_port_url()),
    };
    let engine = EmbeddingEngine::new(&config, &backends);
    assert_eq!(engine.embed("anything"), HashFallback::new(12).generate("anything"));
}
