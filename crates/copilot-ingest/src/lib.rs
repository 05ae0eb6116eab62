//! # copilot-ingest
//!
//! Extractor → chunker → embedder → store. Batch ingestion walks a folder,
//! prepares files in parallel, and stores them in sorted path order.

pub mod chunker;
pub mod document;
pub mod extract;
pub mod pipeline;
pub mod summary;

pub use chunker::chunk;
pub use document::DocumentBuilder;
pub use extract::ExtractorRegistry;
pub use pipeline::IngestPipeline;
