use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    pub indexed_documents: usize,
    pub indexed_chunks: usize,
    pub embedding_dimensions: usize,
}
