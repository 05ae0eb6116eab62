//! Solution synthesis: generative chain first, rule-based templates last.

use std::sync::Arc;

use copilot_core::config::GenerationConfig;
use copilot_core::models::{DegradationEvent, SearchResult, SolutionSource, SuggestedSolution, Ticket};
use copilot_observability::solutions_span;
use tracing::{debug, info};

use crate::chain::GenerationChain;
use crate::fallback::rule_based_solutions;
use crate::parse::parse_solutions;
use crate::prompt::solution_request;
use crate::{COMPONENT, RULE_BASED};

/// Solutions for one ticket and the tier that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Synthesis {
    /// One to three solutions.
    pub solutions: Vec<SuggestedSolution>,
    pub source: SolutionSource,
}

pub struct SolutionSynthesizer {
    chain: Arc<GenerationChain>,
    temperature: f64,
}

impl SolutionSynthesizer {
    pub fn new(chain: Arc<GenerationChain>, config: &GenerationConfig) -> Self {
        Self {
            chain,
            temperature: config.solution_temperature,
        }
    }

    pub fn chain(&self) -> &GenerationChain {
        &self.chain
    }

    /// Never fails: an exhausted or empty chain yields rule-based solutions.
    pub fn synthesize(&self, ticket: &Ticket, results: &[SearchResult]) -> Synthesis {
        let _span = solutions_span!(ticket.id).entered();

        if self.chain.is_empty() {
            debug!("no generation providers configured, using rule-based solutions");
            return rule_based(ticket, results);
        }

        let request = solution_request(ticket, results, self.temperature);
        match self.chain.complete_with(&request, parse_solutions) {
            Ok((solutions, provider)) => {
                info!(provider = %provider, solutions = solutions.len(), "solutions generated");
                Synthesis {
                    solutions,
                    source: SolutionSource::Generated { provider },
                }
            }
            Err(e) => {
                self.chain
                    .record(DegradationEvent::now(COMPONENT, e.to_string(), RULE_BASED));
                rule_based(ticket, results)
            }
        }
    }
}

fn rule_based(ticket: &Ticket, results: &[SearchResult]) -> Synthesis {
    Synthesis {
        solutions: rule_based_solutions(ticket, results),
        source: SolutionSource::RuleBased,
    }
}
