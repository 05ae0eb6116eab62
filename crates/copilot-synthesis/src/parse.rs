//! Parsing of generative replies.
//!
//! Models often wrap JSON in a fenced code block. A reply that already
//! starts with a JSON object is taken as is, so backticks inside its strings
//! survive. Otherwise the first fenced block wins, and without one the whole
//! reply is parsed. Parsing itself is strict: the payload must deserialize
//! into the expected shape.

use std::sync::LazyLock;

use copilot_core::constants::MAX_SOLUTIONS;
use copilot_core::errors::GenerationError;
use copilot_core::models::{SuggestedSolution, TicketCategory, TicketPriority};
use regex::Regex;
use serde::Deserialize;

static FENCED_BLOCK: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)```[A-Za-z0-9_-]*[ \t]*\r?\n?(.*?)```").ok());

/// The JSON payload of a reply: the trimmed reply when it is a bare object,
/// else the first fenced block's body, else the trimmed reply. An
/// unterminated fence loses its opener.
pub fn unwrap_fenced(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('{') {
        return trimmed;
    }

    if let Some(caps) = FENCED_BLOCK.as_ref().and_then(|re| re.captures(trimmed)) {
        if let Some(body) = caps.get(1) {
            return body.as_str().trim();
        }
    }

    match trimmed.strip_prefix("```") {
        Some(rest) => rest
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            .trim(),
        None => trimmed,
    }
}

#[derive(Deserialize)]
struct SolutionsEnvelope {
    solutions: Vec<SuggestedSolution>,
}

/// Parse a solutions reply. At most `MAX_SOLUTIONS` are kept and every
/// confidence is clamped to `[0, 1]`. An empty list is a failure.
pub fn parse_solutions(raw: &str) -> Result<Vec<SuggestedSolution>, GenerationError> {
    let payload = unwrap_fenced(raw);
    let envelope: SolutionsEnvelope =
        serde_json::from_str(payload).map_err(|e| GenerationError::Unparseable {
            reason: e.to_string(),
        })?;

    if envelope.solutions.is_empty() {
        return Err(GenerationError::Unparseable {
            reason: "reply contained no solutions".to_string(),
        });
    }

    Ok(envelope
        .solutions
        .into_iter()
        .take(MAX_SOLUTIONS)
        .map(|mut s| {
            s.confidence = clamp_unit(s.confidence);
            s
        })
        .collect())
}

/// Triage fields recovered from a model reply.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTriage {
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub summary: String,
    pub suggested_queue: String,
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTriage {
    category: String,
    priority: String,
    #[serde(default)]
    summary: String,
    #[serde(default)]
    suggested_queue: String,
    confidence: f64,
    #[serde(default)]
    reasoning: String,
}

/// Parse a triage reply. Category and priority labels are matched leniently.
pub fn parse_triage(raw: &str) -> Result<GeneratedTriage, GenerationError> {
    let parsed: RawTriage =
        serde_json::from_str(unwrap_fenced(raw)).map_err(|e| GenerationError::Unparseable {
            reason: e.to_string(),
        })?;

    if parsed.category.trim().is_empty() {
        return Err(GenerationError::Unparseable {
            reason: "triage reply has an empty category".to_string(),
        });
    }

    Ok(GeneratedTriage {
        category: TicketCategory::parse_lenient(&parsed.category),
        priority: TicketPriority::parse_lenient(&parsed.priority),
        summary: parsed.summary.trim().to_string(),
        suggested_queue: parsed.suggested_queue.trim().to_string(),
        confidence: clamp_unit(parsed.confidence),
        reasoning: parsed.reasoning.trim().to_string(),
    })
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
