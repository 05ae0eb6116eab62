//! Span definitions per operation: ingest, search, synthesis.

/// Create an ingestion span.
#[macro_export]
macro_rules! ingest_span {
    ($path:expr) => {
        tracing::info_span!("copilot.ingest", path = %$path)
    };
}

/// Create a search span.
#[macro_export]
macro_rules! search_span {
    ($top_k:expr, $min_score:expr) => {
        tracing::info_span!("copilot.search", top_k = $top_k, min_score = $min_score)
    };
}

/// Create a ticket-solution span.
#[macro_export]
macro_rules! solutions_span {
    ($ticket_id:expr) => {
        tracing::info_span!("copilot.solutions", ticket_id = %$ticket_id)
    };
}
