//! Ticket triage: generative tier first, keyword rules as the fallback.

use std::sync::Arc;

use copilot_core::config::GenerationConfig;
use copilot_core::constants::KEYWORD_TRIAGE_CONFIDENCE;
use copilot_core::models::{
    DegradationEvent, TicketCategory, TicketPriority, TriageResult, TriageSource,
};
use copilot_observability::tracing_setup::events;

use crate::chain::GenerationChain;
use crate::parse::parse_triage;
use crate::prompt::triage_request;
use crate::{COMPONENT, KEYWORD_TRIAGE};

/// Category keywords, checked in order; the first category with a hit wins.
const CATEGORY_KEYWORDS: &[(TicketCategory, &[&str])] = &[
    (
        TicketCategory::Network,
        &["network", "wifi", "internet", "connection", "router", "switch"],
    ),
    (
        TicketCategory::Hardware,
        &["hardware", "computer", "laptop", "desktop", "printer", "monitor"],
    ),
    (
        TicketCategory::Software,
        &["software", "application", "program", "install", "update"],
    ),
    (
        TicketCategory::Security,
        &["security", "virus", "malware", "breach", "access"],
    ),
    (
        TicketCategory::Performance,
        &["slow", "performance", "lag", "freeze", "crash"],
    ),
];

const PRIORITY_KEYWORDS: &[(TicketPriority, &[&str])] = &[
    (
        TicketPriority::Critical,
        &["urgent", "critical", "down", "emergency", "outage"],
    ),
    (
        TicketPriority::High,
        &["high", "important", "asap", "immediately"],
    ),
    (TicketPriority::Low, &["low", "minor", "when possible"]),
];

/// Support queue that handles a category.
pub fn queue_for(category: TicketCategory) -> &'static str {
    match category {
        TicketCategory::Network => "network-team",
        TicketCategory::Hardware => "hardware-team",
        TicketCategory::Software => "software-team",
        TicketCategory::Security => "security-team",
        TicketCategory::Performance => "performance-team",
        TicketCategory::Other => "general-support",
    }
}

fn first_match<T: Copy>(text: &str, table: &[(T, &[&str])]) -> Option<T> {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(value, _)| *value)
}

/// Deterministic keyword classification of a ticket's title and description.
pub fn keyword_triage(title: &str, description: &str) -> TriageResult {
    let text = format!("{title} {description}").to_lowercase();
    let category = first_match(&text, CATEGORY_KEYWORDS).unwrap_or(TicketCategory::Other);
    let priority = first_match(&text, PRIORITY_KEYWORDS).unwrap_or(TicketPriority::Medium);

    TriageResult {
        category,
        priority,
        summary: format!("Issue categorized as {category} based on ticket content analysis"),
        suggested_queue: queue_for(category).to_string(),
        confidence: KEYWORD_TRIAGE_CONFIDENCE,
        reasoning: "Analysis based on keyword matching and ticket content patterns".to_string(),
        source: TriageSource::Keyword,
    }
}

pub struct TicketTriager {
    chain: Arc<GenerationChain>,
    temperature: f64,
    max_tokens: u32,
    generative: bool,
}

impl TicketTriager {
    pub fn new(chain: Arc<GenerationChain>, config: &GenerationConfig) -> Self {
        Self {
            chain,
            temperature: config.triage_temperature,
            max_tokens: config.triage_max_tokens,
            generative: config.generative_triage,
        }
    }

    /// Never fails: without a usable generative reply the keyword rules answer.
    pub fn triage(&self, title: &str, description: &str) -> TriageResult {
        let result = self
            .try_generative(title, description)
            .unwrap_or_else(|| keyword_triage(title, description));

        let source = match &result.source {
            TriageSource::Generated { provider } => provider.as_str(),
            TriageSource::Keyword => KEYWORD_TRIAGE,
        };
        events::ticket_triaged(result.category.as_str(), result.priority.as_str(), source);
        result
    }

    fn try_generative(&self, title: &str, description: &str) -> Option<TriageResult> {
        if !self.generative || self.chain.is_empty() {
            return None;
        }

        let request = triage_request(title, description, self.temperature, self.max_tokens);
        match self.chain.complete_with(&request, parse_triage) {
            Ok((generated, provider)) => {
                let suggested_queue = if generated.suggested_queue.is_empty() {
                    queue_for(generated.category).to_string()
                } else {
                    generated.suggested_queue
                };
                let summary = if generated.summary.is_empty() {
                    format!("Issue categorized as {}", generated.category)
                } else {
                    generated.summary
                };
                Some(TriageResult {
                    category: generated.category,
                    priority: generated.priority,
                    summary,
                    suggested_queue,
                    confidence: generated.confidence,
                    reasoning: generated.reasoning,
                    source: TriageSource::Generated { provider },
                })
            }
            Err(e) => {
                self.chain
                    .record(DegradationEvent::now(COMPONENT, e.to_string(), KEYWORD_TRIAGE));
                None
            }
        }
    }
}
