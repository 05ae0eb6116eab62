use serde::{Deserialize, Serialize};

use super::ticket::{TicketCategory, TicketPriority};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TriageSource {
    Generated { provider: String },
    Keyword,
}

/// Suggested classification for a new ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub summary: String,
    /// Support queue the ticket should be routed to.
    pub suggested_queue: String,
    pub confidence: f64,
    pub reasoning: String,
    pub source: TriageSource,
}
