use serde::{Deserialize, Serialize};

use super::document::{FileType, PageRange};
use crate::constants::{RELEVANCE_HIGH_THRESHOLD, RELEVANCE_MEDIUM_THRESHOLD};

/// Coarse relevance label derived from a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    pub fn from_score(score: f64) -> Self {
        if score >= RELEVANCE_HIGH_THRESHOLD {
            Self::High
        } else if score >= RELEVANCE_MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// The document side of a search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub id: String,
    pub title: String,
    pub source_path: String,
    pub file_type: FileType,
    pub tags: Vec<String>,
}

/// The chunk side of a search hit. The embedding is not carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChunkRef {
    pub id: String,
    pub ordinal: usize,
    pub text: String,
    pub pages: PageRange,
}

/// One ranked hit of a search call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub document: DocumentRef,
    pub chunk: ChunkRef,
    pub score: f64,
    pub relevance: Relevance,
}
