//! Structured log events for key pipeline operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a document being added to the index.
pub fn document_ingested(document_id: &str, source_path: &str, chunks: usize, embedded: usize) {
    tracing::info!(
        event = "document_ingested",
        document_id = %document_id,
        source_path = %source_path,
        chunks = chunks,
        embedded = embedded,
        "document ingested"
    );
}

/// Log a per-file ingestion problem that did not stop the batch.
pub fn ingest_warning(path: &str, message: &str) {
    tracing::warn!(
        event = "ingest_warning",
        path = %path,
        message = %message,
        "ingest warning"
    );
}

/// Log the end of an ingestion batch.
pub fn ingest_completed(indexed: usize, warnings: usize, skipped: usize) {
    tracing::info!(
        event = "ingest_completed",
        indexed = indexed,
        warnings = warnings,
        skipped = skipped,
        "ingest completed"
    );
}

/// Log a degradation trigger event.
pub fn degradation_triggered(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "degradation_triggered",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "degradation triggered"
    );
}

/// Log a completed search.
pub fn search_completed(results: usize, top_k: usize, min_score: f64) {
    tracing::debug!(
        event = "search_completed",
        results = results,
        top_k = top_k,
        min_score = min_score,
        "search completed"
    );
}

/// Log a solution bundle being produced for a ticket.
pub fn solutions_generated(ticket_id: &str, solutions: usize, source: &str, confidence: f64) {
    tracing::info!(
        event = "solutions_generated",
        ticket_id = %ticket_id,
        solutions = solutions,
        source = %source,
        confidence = confidence,
        "solutions generated"
    );
}

/// Log a triage decision.
pub fn ticket_triaged(category: &str, priority: &str, source: &str) {
    tracing::info!(
        event = "ticket_triaged",
        category = %category,
        priority = %priority,
        source = %source,
        "ticket triaged"
    );
}
