//! Batch and single-file ingestion.
//!
//! Files are collected single-threaded in sorted path order, prepared
//! (extracted, chunked, embedded) in parallel, then stored in that same order.
//! A failing file becomes a warning; the batch carries on.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use copilot_core::config::IngestConfig;
use copilot_core::errors::{CopilotError, CopilotResult, ExtractionError};
use copilot_core::models::{Document, IngestReport, IngestWarning};
use copilot_core::traits::{IDocumentStore, IEmbeddingProvider};
use copilot_observability::ingest_span;
use copilot_observability::tracing_setup::events;
use rayon::prelude::*;
use tracing::debug;
use walkdir::WalkDir;

use crate::document::DocumentBuilder;
use crate::extract::ExtractorRegistry;

pub struct IngestPipeline {
    registry: ExtractorRegistry,
    builder: DocumentBuilder,
    embedder: Arc<dyn IEmbeddingProvider>,
    store: Arc<dyn IDocumentStore>,
}

impl IngestPipeline {
    pub fn new(
        config: &IngestConfig,
        embedder: Arc<dyn IEmbeddingProvider>,
        store: Arc<dyn IDocumentStore>,
    ) -> Self {
        Self {
            registry: ExtractorRegistry::with_defaults(),
            builder: DocumentBuilder::from_config(config),
            embedder,
            store,
        }
    }

    pub fn with_registry(mut self, registry: ExtractorRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Ingest every supported file under `root` (or `root` itself if it is a file).
    ///
    /// Fails only when `root` does not exist. Unsupported files are counted as
    /// skipped; unreadable or empty files become warnings.
    pub fn ingest_path(&self, root: &Path) -> CopilotResult<IngestReport> {
        let _span = ingest_span!(root.display()).entered();

        if !root.exists() {
            return Err(CopilotError::not_found("path", root.display().to_string()));
        }

        let mut report = IngestReport::default();
        let files = self.collect_files(root, &mut report);

        let prepared: Vec<(PathBuf, Result<Document, ExtractionError>)> = files
            .into_par_iter()
            .map(|path| {
                let result = self.prepare(&path);
                (path, result)
            })
            .collect();

        for (path, result) in prepared {
            let outcome = result
                .map_err(CopilotError::from)
                .and_then(|doc| self.publish(doc));
            match outcome {
                Ok(doc) => report.documents.push(doc),
                Err(e) => push_warning(&mut report, &path, &e.to_string()),
            }
        }

        events::ingest_completed(
            report.indexed_count(),
            report.warnings.len(),
            report.skipped,
        );
        Ok(report)
    }

    /// Ingest a single file. Errors are returned rather than collected.
    pub fn ingest_file(&self, path: &Path) -> CopilotResult<Document> {
        let _span = ingest_span!(path.display()).entered();
        let doc = self.prepare(path)?;
        self.publish(doc)
    }

    /// Write an uploaded file into `uploads_dir` and ingest it.
    ///
    /// Only the final component of `file_name` is used, so an upload can
    /// never land outside `uploads_dir`. An existing file of the same name is
    /// overwritten. A name without a supported extension is invalid input.
    pub fn upload(
        &self,
        uploads_dir: &Path,
        file_name: &str,
        bytes: &[u8],
    ) -> CopilotResult<Document> {
        let name = sanitize_file_name(file_name)?;
        let target = uploads_dir.join(name);
        if !self.registry.supports(&target) {
            return Err(CopilotError::invalid_input(format!(
                "unsupported file type: {name}"
            )));
        }

        fs::create_dir_all(uploads_dir).map_err(|e| CopilotError::Io {
            path: uploads_dir.display().to_string(),
            reason: e.to_string(),
        })?;
        fs::write(&target, bytes).map_err(|e| CopilotError::Io {
            path: target.display().to_string(),
            reason: e.to_string(),
        })?;
        debug!(path = %target.display(), bytes = bytes.len(), "upload written");

        self.ingest_file(&target)
    }

    fn collect_files(&self, root: &Path, report: &mut IngestReport) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let path = entry.into_path();
                    if self.registry.supports(&path) {
                        files.push(path);
                    } else {
                        debug!(path = %path.display(), "skipping unsupported file");
                        report.skipped += 1;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let path = e
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| root.to_path_buf());
                    push_warning(report, &path, &e.to_string());
                }
            }
        }
        files
    }

    fn prepare(&self, path: &Path) -> Result<Document, ExtractionError> {
        let (file_type, text) = self.registry.extract(path)?;
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyContent {
                path: path.display().to_string(),
            });
        }
        Ok(self
            .builder
            .build(path, file_type, text, self.embedder.as_ref()))
    }

    fn publish(&self, doc: Document) -> CopilotResult<Document> {
        self.store.store(doc.clone())?;
        events::document_ingested(
            &doc.id,
            &doc.source_path,
            doc.chunks.len(),
            doc.searchable_chunks().count(),
        );
        Ok(doc)
    }
}

fn push_warning(report: &mut IngestReport, path: &Path, error: &str) {
    let path = path.display().to_string();
    let message = format!("Error processing {path}: {error}");
    events::ingest_warning(&path, &message);
    report.warnings.push(IngestWarning { path, message });
}

fn sanitize_file_name(file_name: &str) -> CopilotResult<&str> {
    Path::new(file_name)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.trim().is_empty() && !n.starts_with('.'))
        .ok_or_else(|| CopilotError::invalid_input(format!("invalid file name: {file_name:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_keeps_final_component() {
        assert_eq!(sanitize_file_name("guide.md").unwrap(), "guide.md");
        assert_eq!(sanitize_file_name("../../etc/guide.md").unwrap(), "guide.md");
        assert_eq!(sanitize_file_name("/abs/path/notes.txt").unwrap(), "notes.txt");
    }

    #[test]
    fn sanitize_rejects_empty_and_hidden() {
        assert!(sanitize_file_name("").is_err());
        assert!(sanitize_file_name("..").is_err());
        assert!(sanitize_file_name(".env").is_err());
    }
}
