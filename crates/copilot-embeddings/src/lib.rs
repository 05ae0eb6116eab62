//! # copilot-embeddings
//!
//! Turns text into fixed-dimension vectors. Providers (remote API, local
//! endpoint) are tried in configured order; when all of them fail the engine
//! answers with a deterministic hash projection, so `embed` never fails.

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;

pub use degradation::DegradationChain;
pub use engine::EmbeddingEngine;
pub use providers::{ApiProvider, HashFallback, LocalProvider};

/// Component name used in degradation events.
pub const COMPONENT: &str = "embedding";
