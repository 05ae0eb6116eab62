pub mod backends_config;
pub mod copilot_config;
pub mod defaults;
pub mod embedding_config;
pub mod generation_config;
pub mod ingest_config;
pub mod observability_config;
pub mod retrieval_config;

pub use backends_config::BackendsConfig;
pub use copilot_config::CopilotConfig;
pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use ingest_config::{IngestConfig, ReingestPolicy};
pub use observability_config::ObservabilityConfig;
pub use retrieval_config::RetrievalConfig;
