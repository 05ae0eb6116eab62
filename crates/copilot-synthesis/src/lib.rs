//! # copilot-synthesis
//!
//! Turns a ticket plus its retrieved passages into suggested solutions.
//! Chat providers are tried in configured order; a reply must parse into at
//! least one solution or the next provider is asked. When every provider
//! fails, rule-based templates answer instead, so synthesis never fails.
//!
//! The same provider chain backs generative ticket triage, with keyword
//! triage as its fallback.

pub mod chain;
pub mod fallback;
pub mod parse;
pub mod prompt;
pub mod providers;
pub mod synthesizer;
pub mod triage;

pub use chain::GenerationChain;
pub use synthesizer::{SolutionSynthesizer, Synthesis};
pub use triage::TicketTriager;

/// Component name used in degradation events.
pub const COMPONENT: &str = "generation";

/// Fallback name recorded when rule-based templates replace the chain.
pub const RULE_BASED: &str = "rule_based";

/// Fallback name recorded when keyword triage replaces the chain.
pub const KEYWORD_TRIAGE: &str = "keyword_triage";
