//! # copilot-storage
//!
//! `InMemoryDocumentStore` implements `IDocumentStore` over a single
//! `RwLock`-guarded collection. Search is a linear cosine scan over every
//! embedded chunk; see `search::rank`.

pub mod memory_store;
pub mod search;
pub mod similarity;

pub use memory_store::InMemoryDocumentStore;
pub use similarity::cosine_similarity;
