//! # copilot-core
//!
//! Foundation crate for the helpdesk copilot.
//! Defines the document/search/solution data contracts, the provider and
//! store traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod transport;

// Re-export the most commonly used types at the crate root.
pub use config::CopilotConfig;
pub use errors::{CopilotError, CopilotResult, ErrorCode};
pub use models::{
    Chunk, Document, FileType, Relevance, SearchResult, SuggestedSolution, Ticket,
    TicketCategory, TicketPriority, TicketSolutionBundle,
};
