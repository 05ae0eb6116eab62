//! RetrievalOrchestrator: owns every subsystem and exposes the copilot's
//! operations. Safe to share behind an `Arc` across request threads.
//!
//! AI backend outages never surface here: the embedding engine and the
//! synthesizer absorb them. Their degradation events are collected after
//! every operation and can be drained for reporting.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use copilot_core::config::CopilotConfig;
use copilot_core::errors::{CopilotError, CopilotResult};
use copilot_core::models::{
    DegradationEvent, Document, FileType, IndexStats, IngestReport, SearchResult,
    SolutionSource, TicketSolutionBundle, TriageResult,
};
use copilot_core::traits::{
    IDocumentStore, IEmbeddingProvider, IGenerationProvider, ITicketRepository,
};
use copilot_embeddings::EmbeddingEngine;
use copilot_ingest::{ExtractorRegistry, IngestPipeline};
use copilot_observability::tracing_setup::events;
use copilot_observability::{search_span, DegradationTracker};
use copilot_storage::InMemoryDocumentStore;
use copilot_synthesis::{GenerationChain, SolutionSynthesizer, TicketTriager, RULE_BASED};
use tracing::info;

use crate::repository::InMemoryTicketRepository;

/// Optional overrides for the subsystems built from configuration.
#[derive(Default)]
pub struct OrchestratorOptions {
    /// Embedding chain. `None` builds it from `embedding`/`backends` config.
    pub embedding_providers: Option<Vec<Box<dyn IEmbeddingProvider>>>,
    /// Generation chain. `None` builds it from `generation`/`backends` config.
    pub generation_providers: Option<Vec<Box<dyn IGenerationProvider>>>,
    /// Document store. `None` uses an in-memory store.
    pub store: Option<Arc<dyn IDocumentStore>>,
    /// Ticket source. `None` uses an empty in-memory repository.
    pub tickets: Option<Arc<dyn ITicketRepository>>,
    /// Text extractors per file type. `None` uses the built-in set, whose
    /// PDF extractor only emits a placeholder notice.
    pub extractors: Option<ExtractorRegistry>,
}

pub struct RetrievalOrchestrator {
    config: CopilotConfig,
    embedder: Arc<EmbeddingEngine>,
    store: Arc<dyn IDocumentStore>,
    tickets: Arc<dyn ITicketRepository>,
    pipeline: IngestPipeline,
    generation: Arc<GenerationChain>,
    synthesizer: SolutionSynthesizer,
    triager: TicketTriager,
    degradation: Mutex<DegradationTracker>,
}

impl RetrievalOrchestrator {
    /// Build every subsystem from configuration alone.
    pub fn from_config(config: CopilotConfig) -> CopilotResult<Self> {
        Self::new(config, OrchestratorOptions::default())
    }

    pub fn new(config: CopilotConfig, opts: OrchestratorOptions) -> CopilotResult<Self> {
        config.validate()?;

        let embedder = Arc::new(match opts.embedding_providers {
            Some(providers) => EmbeddingEngine::with_providers(&config.embedding, providers),
            None => EmbeddingEngine::new(&config.embedding, &config.backends),
        });

        let generation = Arc::new(match opts.generation_providers {
            Some(providers) => {
                let mut chain = GenerationChain::new();
                for provider in providers {
                    chain.push(provider);
                }
                chain
            }
            None => GenerationChain::from_config(&config.generation, &config.backends),
        });

        let store: Arc<dyn IDocumentStore> = match opts.store {
            Some(store) => store,
            None => Arc::new(
                InMemoryDocumentStore::new(config.ingest.reingest_policy)
                    .with_dimensions(config.embedding.dimensions),
            ),
        };
        let tickets: Arc<dyn ITicketRepository> = match opts.tickets {
            Some(tickets) => tickets,
            None => Arc::new(InMemoryTicketRepository::new()),
        };

        let mut pipeline = IngestPipeline::new(&config.ingest, embedder.clone(), store.clone());
        if let Some(registry) = opts.extractors {
            pipeline = pipeline.with_registry(registry);
        }
        let synthesizer = SolutionSynthesizer::new(generation.clone(), &config.generation);
        let triager = TicketTriager::new(generation.clone(), &config.generation);

        info!(
            embedding = ?embedder.provider_names(),
            generation = ?generation.provider_names(),
            dims = embedder.dimensions(),
            "RetrievalOrchestrator initialized"
        );

        Ok(Self {
            config,
            embedder,
            store,
            tickets,
            pipeline,
            generation,
            synthesizer,
            triager,
            degradation: Mutex::new(DegradationTracker::new()),
        })
    }

    pub fn config(&self) -> &CopilotConfig {
        &self.config
    }

    /// Ingest a folder (or a single file). `None` ingests the configured default path.
    pub fn ingest(&self, path: Option<&Path>) -> CopilotResult<IngestReport> {
        let root = path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(&self.config.ingest.default_path));
        let report = self.pipeline.ingest_path(&root);
        self.collect_degradation();
        report
    }

    /// Semantic search. `None` or 0 for `top_k` / `min_score` selects the
    /// configured defaults.
    pub fn search(
        &self,
        query: &str,
        top_k: Option<usize>,
        min_score: Option<f64>,
    ) -> CopilotResult<Vec<SearchResult>> {
        self.search_filtered(query, top_k, min_score, &[])
    }

    /// Like [`search`](Self::search), restricted to `file_types` unless empty.
    pub fn search_filtered(
        &self,
        query: &str,
        top_k: Option<usize>,
        min_score: Option<f64>,
        file_types: &[FileType],
    ) -> CopilotResult<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(CopilotError::invalid_input("query must not be blank"));
        }
        let top_k = top_k
            .filter(|&k| k > 0)
            .unwrap_or(self.config.retrieval.default_top_k);
        let min_score = match min_score {
            Some(s) if s.is_nan() || !(0.0..=1.0).contains(&s) => {
                return Err(CopilotError::invalid_input(format!(
                    "min_score must be within [0, 1], got {s}"
                )));
            }
            Some(s) if s > 0.0 => s,
            _ => self.config.retrieval.default_min_score,
        };

        let _span = search_span!(top_k, min_score).entered();
        let results = self.run_search(query, top_k, min_score, file_types);
        self.collect_degradation();
        results
    }

    /// Retrieve grounding passages for a ticket and synthesize solutions.
    pub fn get_ticket_solutions(&self, ticket_id: &str) -> CopilotResult<TicketSolutionBundle> {
        if ticket_id.trim().is_empty() {
            return Err(CopilotError::invalid_input("ticket id must not be blank"));
        }
        let ticket = self
            .tickets
            .get_ticket(ticket_id)?
            .ok_or_else(|| CopilotError::not_found("ticket", ticket_id))?;
        if !ticket.has_context() {
            return Err(CopilotError::invalid_input(format!(
                "ticket {ticket_id} has neither title nor description"
            )));
        }

        let sources = self.run_search(
            &ticket.retrieval_query(),
            self.config.retrieval.default_top_k,
            self.config.retrieval.default_min_score,
            &[],
        );
        let sources = match sources {
            Ok(sources) => sources,
            Err(e) => {
                self.collect_degradation();
                return Err(e);
            }
        };

        let synthesis = self.synthesizer.synthesize(&ticket, &sources);
        self.collect_degradation();

        let confidence = TicketSolutionBundle::aggregate_confidence(&sources);
        let source_name = match &synthesis.source {
            SolutionSource::Generated { provider } => provider.as_str(),
            SolutionSource::RuleBased => RULE_BASED,
        };
        events::solutions_generated(
            &ticket.id,
            synthesis.solutions.len(),
            source_name,
            confidence,
        );

        Ok(TicketSolutionBundle {
            ticket_id: ticket.id,
            solutions: synthesis.solutions,
            sources,
            confidence,
            source: synthesis.source,
            generated_at: Utc::now(),
        })
    }

    /// Store an uploaded file under the configured uploads folder and index it.
    pub fn upload_document(&self, file_name: &str, bytes: &[u8]) -> CopilotResult<Document> {
        let uploads_dir = PathBuf::from(&self.config.ingest.uploads_dir);
        let document = self.pipeline.upload(&uploads_dir, file_name, bytes);
        self.collect_degradation();
        document
    }

    pub fn index_stats(&self) -> CopilotResult<IndexStats> {
        Ok(IndexStats {
            indexed_documents: self.store.count()?,
            indexed_chunks: self.store.searchable_chunk_count()?,
            embedding_dimensions: self.embedder.dimensions(),
        })
    }

    /// Suggest category, priority and queue for a new ticket.
    pub fn triage(&self, title: &str, description: &str) -> CopilotResult<TriageResult> {
        if title.trim().is_empty() && description.trim().is_empty() {
            return Err(CopilotError::invalid_input(
                "title and description must not both be blank",
            ));
        }
        let result = self.triager.triage(title, description);
        self.collect_degradation();
        Ok(result)
    }

    /// Take every degradation event raised since the last drain, oldest first.
    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.collect_degradation();
        self.tracker().drain()
    }

    fn run_search(
        &self,
        query: &str,
        top_k: usize,
        min_score: f64,
        file_types: &[FileType],
    ) -> CopilotResult<Vec<SearchResult>> {
        let vector = EmbeddingEngine::embed(&self.embedder, query);
        let results = self
            .store
            .search_filtered(&vector, top_k, min_score, file_types)?;
        events::search_completed(results.len(), top_k, min_score);
        Ok(results)
    }

    fn collect_degradation(&self) {
        let mut tracker = self.tracker();
        tracker.record_all(self.embedder.drain_events());
        tracker.record_all(self.generation.drain_events());
    }

    fn tracker(&self) -> std::sync::MutexGuard<'_, DegradationTracker> {
        self.degradation
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
