//! Prompt construction for solution synthesis and triage.

use std::fmt::Write;

use copilot_core::models::{SearchResult, Ticket};
use copilot_core::traits::CompletionRequest;

pub const SOLUTION_SYSTEM_PROMPT: &str =
    "You are an IT support expert that provides detailed technical solutions. \
     Always respond with valid JSON.";

pub const TRIAGE_SYSTEM_PROMPT: &str =
    "You are an expert IT support triage specialist. Analyze tickets and \
     provide structured triage information. Always respond with valid JSON.";

/// User prompt grounding the model in the ticket and the retrieved passages.
pub fn solution_prompt(ticket: &Ticket, results: &[SearchResult]) -> String {
    let mut prompt = String::from(
        "Based on the following ticket and relevant documentation, \
         suggest solutions.\n\nTicket Information:\n",
    );
    let _ = writeln!(prompt, "- Title: {}", ticket.title);
    let _ = writeln!(prompt, "- Description: {}", ticket.description);
    let _ = writeln!(prompt, "- Category: {}", ticket.category);
    let _ = writeln!(prompt, "- Priority: {}", ticket.priority);

    prompt.push_str("\nRelevant Documentation:\n\n");
    if results.is_empty() {
        prompt.push_str("(no matching documentation was found)\n\n");
    }
    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(prompt, "Document {}: {}", i + 1, result.document.title);
        let _ = writeln!(prompt, "Content: {}", result.chunk.text);
        let _ = writeln!(prompt, "Relevance Score: {:.2}\n", result.score);
    }

    prompt.push_str(
        "Provide 2-3 specific solutions, each with a clear title, a short \
         description, step-by-step instructions, and the titles of the \
         documents used.\n\n\
         Respond with JSON in exactly this shape:\n\
         {\n  \"solutions\": [\n    {\n      \"title\": \"Solution Title\",\n      \
         \"description\": \"Brief description\",\n      \
         \"steps\": [\"Step 1\", \"Step 2\"],\n      \
         \"references\": [\"Document title\"],\n      \
         \"confidence\": 0.9\n    }\n  ]\n}",
    );
    prompt
}

pub fn solution_request(
    ticket: &Ticket,
    results: &[SearchResult],
    temperature: f64,
) -> CompletionRequest {
    CompletionRequest {
        system: SOLUTION_SYSTEM_PROMPT.to_string(),
        user: solution_prompt(ticket, results),
        temperature,
        max_tokens: None,
    }
}

pub fn triage_prompt(title: &str, description: &str) -> String {
    format!(
        "Analyze this IT support ticket and provide triage information.\n\n\
         Title: {title}\n\
         Description: {description}\n\n\
         Respond with JSON containing:\n\
         - category: one of \"Network Issue\", \"Hardware Issue\", \"Software Issue\", \
         \"Security Issue\", \"Performance Issue\", or \"Other\"\n\
         - priority: one of \"low\", \"medium\", \"high\", \"critical\"\n\
         - summary: a one-sentence summary of the issue\n\
         - suggestedQueue: the support queue that should handle it\n\
         - confidence: a number between 0 and 1\n\
         - reasoning: a short explanation of the decision"
    )
}

pub fn triage_request(
    title: &str,
    description: &str,
    temperature: f64,
    max_tokens: u32,
) -> CompletionRequest {
    CompletionRequest {
        system: TRIAGE_SYSTEM_PROMPT.to_string(),
        user: triage_prompt(title, description),
        temperature,
        max_tokens: Some(max_tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copilot_core::models::{TicketCategory, TicketPriority};
    use test_fixtures::search_hit;

    fn ticket() -> Ticket {
        Ticket {
            id: "T-1".into(),
            title: "Wifi down".into(),
            description: "No internet on floor 3".into(),
            category: TicketCategory::Network,
            priority: TicketPriority::High,
        }
    }

    #[test]
    fn solution_prompt_carries_ticket_and_passages() {
        let prompt = solution_prompt(
            &ticket(),
            &[search_hit("wifi.md", "Restart the access point.", 0.91234)],
        );
        assert!(prompt.contains("- Title: Wifi down"));
        assert!(prompt.contains("- Category: Network Issue"));
        assert!(prompt.contains("- Priority: high"));
        assert!(prompt.contains("Document 1: wifi.md"));
        assert!(prompt.contains("Content: Restart the access point."));
        assert!(prompt.contains("Relevance Score: 0.91"));
        assert!(prompt.contains("\"solutions\""));
    }

    #[test]
    fn solution_prompt_notes_missing_documentation() {
        let prompt = solution_prompt(&ticket(), &[]);
        assert!(prompt.contains("no matching documentation"));
    }

    #[test]
    fn triage_request_is_bounded() {
        let request = triage_request("Printer jam", "tray 2", 0.3, 500);
        assert_eq!(request.max_tokens, Some(500));
        assert_eq!(request.temperature, 0.3);
        assert!(request.user.contains("Title: Printer jam"));
        assert!(request.user.contains("suggestedQueue"));
    }
}
