pub mod embedding;
pub mod extractor;
pub mod generation;
pub mod storage;
pub mod ticket_repository;

pub use embedding::IEmbeddingProvider;
pub use extractor::ITextExtractor;
pub use generation::{CompletionRequest, IGenerationProvider};
pub use storage::IDocumentStore;
pub use ticket_repository::ITicketRepository;
