use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::search_result::SearchResult;

/// A candidate fix for a ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedSolution {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub steps: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
}

/// Which tier produced a set of solutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolutionSource {
    Generated { provider: String },
    RuleBased,
}

/// Everything returned for one ticket: solutions plus their provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketSolutionBundle {
    pub ticket_id: String,
    pub solutions: Vec<SuggestedSolution>,
    pub sources: Vec<SearchResult>,
    /// Mean score of `sources`, 0.0 when empty.
    pub confidence: f64,
    pub source: SolutionSource,
    pub generated_at: DateTime<Utc>,
}

impl TicketSolutionBundle {
    /// Mean score of the results, or 0.0 for an empty slice.
    pub fn aggregate_confidence(results: &[SearchResult]) -> f64 {
        if results.is_empty() {
            return 0.0;
        }
        results.iter().map(|r| r.score).sum::<f64>() / results.len() as f64
    }
}
