pub mod degradation_event;
pub mod document;
pub mod index_stats;
pub mod ingest_report;
pub mod search_result;
pub mod solution;
pub mod ticket;
pub mod triage;

pub use degradation_event::DegradationEvent;
pub use document::{Chunk, Document, FileType, PageRange};
pub use index_stats::IndexStats;
pub use ingest_report::{IngestReport, IngestWarning};
pub use search_result::{ChunkRef, DocumentRef, Relevance, SearchResult};
pub use solution::{SolutionSource, SuggestedSolution, TicketSolutionBundle};
pub use ticket::{CategoryFamily, Ticket, TicketCategory, TicketPriority};
pub use triage::{TriageResult, TriageSource};
