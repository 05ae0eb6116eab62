use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::search_result::{ChunkRef, DocumentRef};

/// Source format of an indexed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    #[serde(rename = "md")]
    Markdown,
    #[serde(rename = "txt")]
    Text,
}

impl FileType {
    /// Resolve a file type from an extension, case-insensitively, with or without the dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "md" => Some(Self::Markdown),
            "txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Markdown => "md",
            Self::Text => "txt",
        }
    }
}

impl std::fmt::Display for FileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Approximate page span of a chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRange {
    pub start: usize,
    pub end: usize,
}

impl PageRange {
    /// Two chunks per page.
    pub fn for_ordinal(ordinal: usize) -> Self {
        let start = ordinal / 2;
        Self {
            start,
            end: start + 1,
        }
    }
}

/// A bounded span of a document's text; the unit of embedding and retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// `<document id>#<ordinal>`.
    pub id: String,
    pub ordinal: usize,
    pub text: String,
    /// Empty when embedding failed; such chunks are never searched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embedding: Vec<f32>,
    pub pages: PageRange,
}

impl Chunk {
    pub fn new(document_id: &str, ordinal: usize, text: String, embedding: Vec<f32>) -> Self {
        Self {
            id: Self::chunk_id(document_id, ordinal),
            ordinal,
            text,
            embedding,
            pages: PageRange::for_ordinal(ordinal),
        }
    }

    pub fn chunk_id(document_id: &str, ordinal: usize) -> String {
        format!("{document_id}#{ordinal}")
    }

    pub fn is_searchable(&self) -> bool {
        !self.embedding.is_empty()
    }

    pub fn reference(&self) -> ChunkRef {
        ChunkRef {
            id: self.id.clone(),
            ordinal: self.ordinal,
            text: self.text.clone(),
            pages: self.pages,
        }
    }
}

/// An indexed source document. Immutable once stored; re-ingestion creates a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub source_path: String,
    pub file_type: FileType,
    pub content: String,
    pub summary: String,
    pub tags: Vec<String>,
    pub chunks: Vec<Chunk>,
    pub indexed_at: DateTime<Utc>,
}

impl Document {
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Chunks carrying an embedding.
    pub fn searchable_chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|c| c.is_searchable())
    }

    pub fn reference(&self) -> DocumentRef {
        DocumentRef {
            id: self.id.clone(),
            title: self.title.clone(),
            source_path: self.source_path.clone(),
            file_type: self.file_type,
            tags: self.tags.clone(),
        }
    }
}
