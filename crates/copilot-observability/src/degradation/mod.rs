//! Degradation tracking for the provider chains.

pub mod tracker;

pub use tracker::{DegradationTracker, TrackedDegradation};
