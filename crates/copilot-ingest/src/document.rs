//! Builds an indexed [`Document`] from extracted text.

use std::path::Path;

use chrono::Utc;
use copilot_core::config::IngestConfig;
use copilot_core::models::{Chunk, Document, FileType};
use copilot_core::traits::IEmbeddingProvider;
use tracing::warn;

use crate::chunker::chunk;
use crate::summary::{extract_tags, summarize};

/// Chunks, embeds, summarizes, and tags one file's text.
#[derive(Debug, Clone, Copy)]
pub struct DocumentBuilder {
    chunk_max_words: usize,
    summary_chars: usize,
}

impl DocumentBuilder {
    pub fn new(chunk_max_words: usize, summary_chars: usize) -> Self {
        Self {
            chunk_max_words,
            summary_chars,
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.chunk_max_words, config.summary_chars)
    }

    /// Assemble a document with a fresh id. The title is the file name.
    ///
    /// A chunk whose embedding cannot be produced keeps an empty vector and
    /// stays out of search results.
    pub fn build(
        &self,
        path: &Path,
        file_type: FileType,
        content: String,
        embedder: &dyn IEmbeddingProvider,
    ) -> Document {
        let id = Document::new_id();
        let texts = chunk(&content, self.chunk_max_words);
        let embeddings = embed_chunks(&texts, embedder);

        let chunks = texts
            .into_iter()
            .zip(embeddings)
            .enumerate()
            .map(|(ordinal, (text, embedding))| Chunk::new(&id, ordinal, text, embedding))
            .collect();

        let title = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Document {
            summary: summarize(&content, self.summary_chars),
            tags: extract_tags(&content),
            id,
            title,
            source_path: path.display().to_string(),
            file_type,
            content,
            chunks,
            indexed_at: Utc::now(),
        }
    }
}

/// One vector per text. Batch first; on batch failure, per text.
fn embed_chunks(texts: &[String], embedder: &dyn IEmbeddingProvider) -> Vec<Vec<f32>> {
    if texts.is_empty() {
        return Vec::new();
    }
    match embedder.embed_batch(texts) {
        Ok(vectors) if vectors.len() == texts.len() => vectors,
        Ok(vectors) => {
            warn!(
                expected = texts.len(),
                actual = vectors.len(),
                "batch embedding returned wrong count, embedding chunks one by one"
            );
            embed_each(texts, embedder)
        }
        Err(e) => {
            warn!(error = %e, "batch embedding failed, embedding chunks one by one");
            embed_each(texts, embedder)
        }
    }
}

fn embed_each(texts: &[String], embedder: &dyn IEmbeddingProvider) -> Vec<Vec<f32>> {
    texts
        .iter()
        .map(|text| {
            embedder.embed(text).unwrap_or_else(|e| {
                warn!(error = %e, "chunk left without embedding");
                Vec::new()
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use test_fixtures::providers::{FailingEmbedder, FixedEmbedder};

    #[test]
    fn builds_chunks_with_ids_and_embeddings() {
        let embedder = FixedEmbedder::new("fixed", vec![1.0, 0.0]);
        let builder = DocumentBuilder::new(3, 500);
        let doc = builder.build(
            &PathBuf::from("docs/wifi.md"),
            FileType::Markdown,
            "wifi drops often\n\nrestart the router now".to_string(),
            &embedder,
        );

        assert_eq!(doc.title, "wifi.md");
        assert_eq!(doc.source_path, PathBuf::from("docs/wifi.md").display().to_string());
        assert_eq!(doc.chunks.len(), 2);
        assert_eq!(doc.chunks[0].id, format!("{}#0", doc.id));
        assert_eq!(doc.chunks[1].ordinal, 1);
        assert!(doc.chunks.iter().all(|c| c.embedding == vec![1.0, 0.0]));
        assert_eq!(doc.tags, vec!["wifi"]);
        assert_eq!(doc.summary, doc.content);
    }

    #[test]
    fn failed_embedding_leaves_chunks_unsearchable() {
        let embedder = FailingEmbedder::new("down", 2);
        let doc = DocumentBuilder::new(500, 500).build(
            &PathBuf::from("a.txt"),
            FileType::Text,
            "some text".to_string(),
            &embedder,
        );
        assert_eq!(doc.chunks.len(), 1);
        assert!(doc.chunks[0].embedding.is_empty());
        assert_eq!(doc.searchable_chunks().count(), 0);
    }

    #[test]
    fn blank_content_has_no_chunks() {
        let embedder = FixedEmbedder::new("fixed", vec![1.0]);
        let doc = DocumentBuilder::new(500, 500).build(
            &PathBuf::from("blank.txt"),
            FileType::Text,
            "  \n\n ".to_string(),
            &embedder,
        );
        assert!(doc.chunks.is_empty());
        assert_eq!(embedder.calls(), 0);
    }

    #[test]
    fn ids_are_unique_per_build() {
        let embedder = FixedEmbedder::new("fixed", vec![1.0]);
        let builder = DocumentBuilder::new(500, 500);
        let a = builder.build(&PathBuf::from("a.txt"), FileType::Text, "x".into(), &embedder);
        let b = builder.build(&PathBuf::from("a.txt"), FileType::Text, "x".into(), &embedder);
        assert_ne!(a.id, b.id);
    }
}
