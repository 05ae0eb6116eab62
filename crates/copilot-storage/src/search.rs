//! Brute-force ranking over stored chunks.
//!
//! Every embedded chunk is scored, hits under `min_score` are dropped, the rest
//! are stable-sorted by descending score (ties keep document insertion order,
//! then chunk ordinal) and truncated to `top_k`.

use std::cmp::Ordering;
use std::sync::Arc;

use copilot_core::models::{Document, FileType, Relevance, SearchResult};

use crate::similarity::cosine_similarity;

struct Candidate {
    doc: usize,
    chunk: usize,
    score: f64,
}

pub fn rank(
    documents: &[Arc<Document>],
    query: &[f32],
    top_k: usize,
    min_score: f64,
    file_types: &[FileType],
) -> Vec<SearchResult> {
    if top_k == 0 {
        return Vec::new();
    }

    let mut candidates: Vec<Candidate> = Vec::new();
    for (doc_idx, doc) in documents.iter().enumerate() {
        if !file_types.is_empty() && !file_types.contains(&doc.file_type) {
            continue;
        }
        for (chunk_idx, chunk) in doc.chunks.iter().enumerate() {
            if !chunk.is_searchable() {
                continue;
            }
            let score = cosine_similarity(query, &chunk.embedding);
            if score >= min_score {
                candidates.push(Candidate {
                    doc: doc_idx,
                    chunk: chunk_idx,
                    score,
                });
            }
        }
    }

    // `sort_by` is stable.
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates.truncate(top_k);

    candidates
        .into_iter()
        .map(|c| {
            let doc = &documents[c.doc];
            SearchResult {
                document: doc.reference(),
                chunk: doc.chunks[c.chunk].reference(),
                score: c.score,
                relevance: Relevance::from_score(c.score),
            }
        })
        .collect()
}
