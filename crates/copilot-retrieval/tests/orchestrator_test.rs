//! End-to-end scenarios through the orchestrator with scripted backends.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::thread;

use copilot_core::config::CopilotConfig;
use copilot_core::errors::{CopilotError, ExtractionError};
use copilot_core::models::{FileType, Relevance, SolutionSource, Ticket, TriageSource};
use copilot_core::traits::{IEmbeddingProvider, IGenerationProvider, ITextExtractor};
use copilot_retrieval::{
    ExtractorRegistry, InMemoryTicketRepository, OrchestratorOptions, RetrievalOrchestrator,
};
use test_fixtures::providers::{FailingGenerator, KeywordEmbedder, ScriptedGenerator};

const VOCABULARY: &[&str] = &[
    "wifi", "internet", "router", "network", "printer", "vpn", "install", "tray",
];

struct Harness {
    orchestrator: RetrievalOrchestrator,
    tickets: Arc<InMemoryTicketRepository>,
    _uploads: tempfile::TempDir,
}

fn harness(generation: Vec<Box<dyn IGenerationProvider>>) -> Harness {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = CopilotConfig::default();
    config.embedding.dimensions = VOCABULARY.len();
    config.ingest.uploads_dir = uploads.path().display().to_string();

    let tickets = Arc::new(InMemoryTicketRepository::with_tickets(
        test_fixtures::sample_tickets(),
    ));
    let embedding: Vec<Box<dyn IEmbeddingProvider>> =
        vec![Box::new(KeywordEmbedder::new(VOCABULARY))];
    let orchestrator = RetrievalOrchestrator::new(
        config,
        OrchestratorOptions {
            embedding_providers: Some(embedding),
            generation_providers: Some(generation),
            tickets: Some(tickets.clone()),
            ..OrchestratorOptions::default()
        },
    )
    .unwrap();

    Harness {
        orchestrator,
        tickets,
        _uploads: uploads,
    }
}

fn failing_generation() -> Vec<Box<dyn IGenerationProvider>> {
    vec![
        Box::new(FailingGenerator::new("api")),
        Box::new(FailingGenerator::new("local")),
    ]
}

#[test]
fn single_markdown_file_under_bound_is_one_chunk() {
    let h = harness(failing_generation());
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("guide.md"),
        "Restart the router first.\n\nThen reconnect to the wifi network.",
    )
    .unwrap();

    let report = h.orchestrator.ingest(Some(dir.path())).unwrap();
    assert_eq!(report.indexed_count(), 1);
    assert_eq!(report.documents[0].chunks.len(), 1);

    let stats = h.orchestrator.index_stats().unwrap();
    assert_eq!(stats.indexed_documents, 1);
    assert_eq!(stats.indexed_chunks, 1);
    assert_eq!(stats.embedding_dimensions, VOCABULARY.len());
}

#[test]
fn identical_query_scores_one_and_is_high() {
    let h = harness(failing_generation());
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("tray.txt"), "printer jams on tray two").unwrap();
    fs::write(dir.path().join("vpn.md"), "install the vpn client").unwrap();
    h.orchestrator.ingest(Some(dir.path())).unwrap();

    let results = h
        .orchestrator
        .search("printer jams on tray two", Some(5), Some(0.99))
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.title, "tray.txt");
    assert!((results[0].score - 1.0).abs() < 1e-9);
    assert_eq!(results[0].relevance, Relevance::High);
}

#[test]
fn empty_store_search_is_empty_not_error() {
    let h = harness(failing_generation());
    let results = h.orchestrator.search("wifi down", Some(5), Some(0.3)).unwrap();
    assert!(results.is_empty());
}

#[test]
fn search_validates_and_applies_defaults() {
    let h = harness(failing_generation());
    h.orchestrator
        .ingest(Some(&test_fixtures::sample_docs_dir()))
        .unwrap();

    assert!(matches!(
        h.orchestrator.search("   ", None, None),
        Err(CopilotError::InvalidInput { .. })
    ));
    assert!(matches!(
        h.orchestrator.search("wifi", None, Some(1.5)),
        Err(CopilotError::InvalidInput { .. })
    ));
    assert!(matches!(
        h.orchestrator.search("wifi", None, Some(f64::NAN)),
        Err(CopilotError::InvalidInput { .. })
    ));

    let defaults = h.orchestrator.search("wifi router", None, None).unwrap();
    let zeros = h.orchestrator.search("wifi router", Some(0), Some(0.0)).unwrap();
    assert_eq!(defaults, zeros);
    assert!(defaults.len() <= 5);
    assert!(defaults.iter().all(|r| r.score >= 0.3));
    assert!(defaults.windows(2).all(|w| w[0].score >= w[1].score));

    let limited = h.orchestrator.search("wifi router", Some(1), Some(0.01)).unwrap();
    assert_eq!(limited.len(), 1);
}

#[test]
fn search_can_filter_by_file_type() {
    let h = harness(failing_generation());
    h.orchestrator
        .ingest(Some(&test_fixtures::sample_docs_dir()))
        .unwrap();

    let text_only = h
        .orchestrator
        .search_filtered("printer network install", None, Some(0.01), &[FileType::Text])
        .unwrap();
    assert!(!text_only.is_empty());
    assert!(text_only.iter().all(|r| r.document.file_type == FileType::Text));
}

#[test]
fn network_ticket_with_generation_down_gets_grounded_fallback() {
    let h = harness(failing_generation());
    h.orchestrator
        .ingest(Some(&test_fixtures::sample_docs_dir()))
        .unwrap();

    let bundle = h.orchestrator.get_ticket_solutions("T-1001").unwrap();

    assert_eq!(bundle.ticket_id, "T-1001");
    assert_eq!(bundle.source, SolutionSource::RuleBased);
    assert!(!bundle.solutions.is_empty() && bundle.solutions.len() <= 3);
    assert!(!bundle.sources.is_empty(), "wifi guide should match");
    assert!(bundle.solutions[0]
        .references
        .contains(&bundle.sources[0].document.title));

    let mean =
        bundle.sources.iter().map(|r| r.score).sum::<f64>() / bundle.sources.len() as f64;
    assert!((bundle.confidence - mean).abs() < 1e-12);

    let events = h.orchestrator.drain_degradation_events();
    assert!(events
        .iter()
        .any(|e| e.component == "generation" && e.fallback_used == "rule_based"));
    assert!(h.orchestrator.drain_degradation_events().is_empty());
}

#[test]
fn unmatched_ticket_has_zero_confidence() {
    let h = harness(failing_generation());
    h.orchestrator
        .ingest(Some(&test_fixtures::sample_docs_dir()))
        .unwrap();

    // T-1004 shares no vocabulary with the index.
    let bundle = h.orchestrator.get_ticket_solutions("T-1004").unwrap();
    assert!(bundle.sources.is_empty());
    assert_eq!(bundle.confidence, 0.0);
    assert_eq!(bundle.solutions.len(), 1);
    assert!(bundle.solutions[0].references.is_empty());
}

#[test]
fn generated_solutions_are_used_when_backend_answers() {
    let reply = r#"{"solutions":[{"title":"Reinstall the VPN client","description":"d",
                   "steps":["remove","install"],"references":["vpn-client-installation.md"],
                   "confidence":0.8}]}"#;
    let h = harness(vec![Box::new(ScriptedGenerator::new("api", reply))]);
    h.orchestrator
        .ingest(Some(&test_fixtures::sample_docs_dir()))
        .unwrap();

    let bundle = h.orchestrator.get_ticket_solutions("T-1003").unwrap();
    assert_eq!(
        bundle.source,
        SolutionSource::Generated {
            provider: "api".into()
        }
    );
    assert_eq!(bundle.solutions[0].title, "Reinstall the VPN client");
}

#[test]
fn ticket_lookup_errors() {
    let h = harness(failing_generation());
    assert!(matches!(
        h.orchestrator.get_ticket_solutions("T-404"),
        Err(CopilotError::NotFound { .. })
    ));
    assert!(matches!(
        h.orchestrator.get_ticket_solutions("  "),
        Err(CopilotError::InvalidInput { .. })
    ));

    h.tickets.insert(Ticket {
        id: "T-EMPTY".into(),
        title: " ".into(),
        description: String::new(),
        category: copilot_core::models::TicketCategory::Other,
        priority: Default::default(),
    });
    assert!(matches!(
        h.orchestrator.get_ticket_solutions("T-EMPTY"),
        Err(CopilotError::InvalidInput { .. })
    ));
}

#[test]
fn upload_indexes_into_uploads_dir() {
    let h = harness(failing_generation());
    let doc = h
        .orchestrator
        .upload_document("nested/../vpn-guide.md", b"install the vpn client then reboot")
        .unwrap();
    assert_eq!(doc.title, "vpn-guide.md");

    let uploads = Path::new(&h.orchestrator.config().ingest.uploads_dir);
    assert!(uploads.join("vpn-guide.md").is_file());
    assert_eq!(h.orchestrator.index_stats().unwrap().indexed_documents, 1);

    let hits = h.orchestrator.search("vpn install", None, None).unwrap();
    assert_eq!(hits[0].document.id, doc.id);

    assert!(matches!(
        h.orchestrator.upload_document("malware.exe", b"MZ"),
        Err(CopilotError::InvalidInput { .. })
    ));
}

#[test]
fn missing_ingest_root_is_not_found() {
    let h = harness(failing_generation());
    assert!(matches!(
        h.orchestrator
            .ingest(Some(Path::new("/nonexistent/copilot/docs"))),
        Err(CopilotError::NotFound { .. })
    ));
}

#[test]
fn triage_falls_back_to_keywords_and_records_event() {
    let h = harness(failing_generation());
    assert!(matches!(
        h.orchestrator.triage(" ", ""),
        Err(CopilotError::InvalidInput { .. })
    ));

    let result = h.orchestrator.triage("Printer offline", "urgent").unwrap();
    assert_eq!(result.source, TriageSource::Keyword);
    assert_eq!(result.suggested_queue, "hardware-team");
    assert!(h
        .orchestrator
        .drain_degradation_events()
        .iter()
        .any(|e| e.fallback_used == "keyword_triage"));
}

#[test]
fn concurrent_searches_during_ingest() {
    let h = harness(failing_generation());
    let orchestrator = Arc::new(h.orchestrator);

    let writer = {
        let orchestrator = orchestrator.clone();
        thread::spawn(move || {
            for _ in 0..3 {
                orchestrator
                    .ingest(Some(&test_fixtures::sample_docs_dir()))
                    .unwrap();
            }
        })
    };
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let orchestrator = orchestrator.clone();
            thread::spawn(move || {
                for _ in 0..20 {
                    let results = orchestrator.search("wifi printer vpn", Some(5), None).unwrap();
                    assert!(results.len() <= 5);
                    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(orchestrator.index_stats().unwrap().indexed_documents, 9);
}

#[test]
fn defaults_only_orchestrator_works_offline() {
    let mut config = CopilotConfig::default();
    config.embedding.dimensions = 32;
    let orchestrator = RetrievalOrchestrator::from_config(config).unwrap();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "reset the password").unwrap();
    orchestrator.ingest(Some(dir.path())).unwrap();

    let results = orchestrator
        .search("reset the password", None, Some(0.99))
        .unwrap();
    assert_eq!(results.len(), 1);
    assert!(orchestrator.drain_degradation_events().is_empty());
}

struct ManualPdfExtractor;

impl ITextExtractor for ManualPdfExtractor {
    fn file_type(&self) -> FileType {
        FileType::Pdf
    }

    fn extract(&self, _path: &Path) -> Result<String, ExtractionError> {
        Ok("Install the vpn client from the portal.".to_string())
    }
}

#[test]
fn registered_pdf_extractor_feeds_ingest_and_upload() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = CopilotConfig::default();
    config.embedding.dimensions = VOCABULARY.len();
    config.ingest.uploads_dir = uploads.path().display().to_string();

    let mut extractors = ExtractorRegistry::with_defaults();
    extractors.register(Box::new(ManualPdfExtractor));
    let embedding: Vec<Box<dyn IEmbeddingProvider>> =
        vec![Box::new(KeywordEmbedder::new(VOCABULARY))];
    let orchestrator = RetrievalOrchestrator::new(
        config,
        OrchestratorOptions {
            embedding_providers: Some(embedding),
            generation_providers: Some(failing_generation()),
            extractors: Some(extractors),
            ..OrchestratorOptions::default()
        },
    )
    .unwrap();

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("manual.pdf"), b"%PDF-1.4 binary").unwrap();
    let report = orchestrator.ingest(Some(dir.path())).unwrap();
    assert_eq!(report.indexed_count(), 1);
    assert_eq!(report.documents[0].file_type, FileType::Pdf);

    let results = orchestrator
        .search("install the vpn client", Some(5), Some(0.99))
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].document.title, "manual.pdf");
    assert!(results[0].chunk.text.contains("vpn client from the portal"));
    assert!(!results[0].chunk.text.contains("placeholder"));

    let uploaded = orchestrator
        .upload_document("handbook.pdf", b"%PDF-1.4 binary")
        .unwrap();
    assert!(uploaded.content.starts_with("Install the vpn client"));
}
