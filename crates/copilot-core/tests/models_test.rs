use std::path::Path;

use copilot_core::errors::{error_code, CopilotError, ExtractionError, StorageError};
use copilot_core::models::*;
use copilot_core::ErrorCode;

fn result_with_score(score: f64) -> SearchResult {
    SearchResult {
        document: DocumentRef {
            id: "d".into(),
            title: "Doc".into(),
            source_path: "docs/doc.md".into(),
            file_type: FileType::Markdown,
            tags: vec![],
        },
        chunk: ChunkRef {
            id: "d#0".into(),
            ordinal: 0,
            text: "text".into(),
            pages: PageRange::for_ordinal(0),
        },
        score,
        relevance: Relevance::from_score(score),
    }
}

#[test]
fn relevance_buckets_follow_thresholds() {
    assert_eq!(Relevance::from_score(1.0), Relevance::High);
    assert_eq!(Relevance::from_score(0.8), Relevance::High);
    assert_eq!(Relevance::from_score(0.79), Relevance::Medium);
    assert_eq!(Relevance::from_score(0.6), Relevance::Medium);
    assert_eq!(Relevance::from_score(0.59), Relevance::Low);
    assert_eq!(Relevance::from_score(0.3), Relevance::Low);
}

#[test]
fn aggregate_confidence_is_mean_or_zero() {
    assert_eq!(TicketSolutionBundle::aggregate_confidence(&[]), 0.0);
    let results = vec![result_with_score(0.9), result_with_score(0.5)];
    let mean = TicketSolutionBundle::aggregate_confidence(&results);
    assert!((mean - 0.7).abs() < 1e-12);
}

#[test]
fn chunk_ids_derive_from_parent_and_ordinal() {
    let chunk = Chunk::new("doc-1", 3, "body".into(), vec![]);
    assert_eq!(chunk.id, "doc-1#3");
    assert_eq!(chunk.pages, PageRange { start: 1, end: 2 });
    assert!(!chunk.is_searchable());
}

#[test]
fn empty_embedding_is_not_serialized() {
    let chunk = Chunk::new("doc-1", 0, "body".into(), vec![]);
    let json = serde_json::to_value(&chunk).unwrap();
    assert!(json.get("embedding").is_none());
}

#[test]
fn file_type_resolves_case_insensitively() {
    assert_eq!(FileType::from_path(Path::new("a/B.MD")), Some(FileType::Markdown));
    assert_eq!(FileType::from_path(Path::new("guide.Pdf")), Some(FileType::Pdf));
    assert_eq!(FileType::from_extension(".txt"), Some(FileType::Text));
    assert_eq!(FileType::from_path(Path::new("notes.docx")), None);
    assert_eq!(FileType::from_path(Path::new("README")), None);
}

#[test]
fn ticket_category_uses_ticketing_labels() {
    let json = serde_json::to_string(&TicketCategory::Network).unwrap();
    assert_eq!(json, "\"Network Issue\"");
    let parsed: TicketCategory = serde_json::from_str("\"Something Else\"").unwrap();
    assert_eq!(parsed, TicketCategory::Other);
}

#[test]
fn ticket_category_deserializes_loose_labels() {
    let loose = [
        ("\"network\"", TicketCategory::Network),
        ("\"Network Issue\"", TicketCategory::Network),
        ("\"Wired network outage\"", TicketCategory::Network),
        ("\"HARDWARE\"", TicketCategory::Hardware),
        ("\"Other\"", TicketCategory::Other),
    ];
    for (json, expected) in loose {
        let parsed: TicketCategory = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, expected, "{json}");
    }

    let ticket: Ticket = serde_json::from_value(serde_json::json!({
        "id": "T-9",
        "title": "No connection",
        "description": "",
        "category": "network",
        "priority": "high"
    }))
    .unwrap();
    assert_eq!(ticket.category.family(), CategoryFamily::Network);
}

#[test]
fn lenient_category_parsing() {
    assert_eq!(TicketCategory::parse_lenient("Network Issue"), TicketCategory::Network);
    assert_eq!(TicketCategory::parse_lenient("hardware"), TicketCategory::Hardware);
    assert_eq!(TicketCategory::parse_lenient("whatever"), TicketCategory::Other);
    assert_eq!(TicketCategory::Security.family(), CategoryFamily::Other);
    assert_eq!(TicketCategory::Software.family(), CategoryFamily::Software);
}

#[test]
fn retrieval_query_concatenates_fields() {
    let ticket = Ticket {
        id: "T-1".into(),
        title: "wifi down".into(),
        description: "no internet".into(),
        category: TicketCategory::Network,
        priority: TicketPriority::High,
    };
    assert_eq!(ticket.retrieval_query(), "wifi down no internet Network Issue");
    assert!(ticket.has_context());
}

#[test]
fn error_codes_are_stable() {
    assert_eq!(
        CopilotError::not_found("ticket", "T-9").error_code(),
        error_code::NOT_FOUND
    );
    assert_eq!(
        CopilotError::invalid_input("blank").error_code(),
        error_code::INVALID_INPUT
    );
    let wrapped: CopilotError = ExtractionError::UnsupportedFileType {
        path: "a.docx".into(),
    }
    .into();
    assert_eq!(wrapped.error_code(), error_code::UNSUPPORTED_FILE_TYPE);
    let storage: CopilotError = StorageError::LockPoisoned {
        operation: "store".into(),
    }
    .into();
    assert!(storage.coded_string().starts_with("[STORAGE_ERROR]"));
}
