//! Error handling for the copilot.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod copilot_error;
pub mod embedding_error;
pub mod error_code;
pub mod extraction_error;
pub mod generation_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use copilot_error::{CopilotError, CopilotResult};
pub use embedding_error::EmbeddingError;
pub use error_code::ErrorCode;
pub use extraction_error::ExtractionError;
pub use generation_error::GenerationError;
pub use storage_error::StorageError;
