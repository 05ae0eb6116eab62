//! # copilot-observability
//!
//! Tracing subscriber setup, structured log events for the ingest/search/synthesis
//! path, and a tracker for degradation events raised by the provider chains.

pub mod degradation;
pub mod tracing_setup;

pub use degradation::DegradationTracker;
pub use tracing_setup::{init_tracing, init_tracing_from_config};
