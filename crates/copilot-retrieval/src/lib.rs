//! # copilot-retrieval
//!
//! `RetrievalOrchestrator` wires the embedding engine, document store,
//! ingestion pipeline, synthesizer and triager together and exposes the
//! copilot's external operations.

pub mod orchestrator;
pub mod repository;

pub use copilot_ingest::ExtractorRegistry;
pub use orchestrator::{OrchestratorOptions, RetrievalOrchestrator};
pub use repository::InMemoryTicketRepository;
