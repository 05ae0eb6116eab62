//! Text extraction, one extractor per file type.

mod pdf;
mod text;

pub use pdf::PdfPlaceholderExtractor;
pub use text::PlainTextExtractor;

use std::collections::HashMap;
use std::path::Path;

use copilot_core::errors::ExtractionError;
use copilot_core::models::FileType;
use copilot_core::traits::ITextExtractor;

/// Routes a path to the extractor registered for its file type.
pub struct ExtractorRegistry {
    extractors: HashMap<FileType, Box<dyn ITextExtractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl ExtractorRegistry {
    pub fn empty() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Plain text for `.md` and `.txt`, a placeholder for `.pdf`.
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(PlainTextExtractor::new(FileType::Markdown)));
        registry.register(Box::new(PlainTextExtractor::new(FileType::Text)));
        registry.register(Box::new(PdfPlaceholderExtractor));
        registry
    }

    /// Register an extractor, replacing any previous one for the same type.
    pub fn register(&mut self, extractor: Box<dyn ITextExtractor>) {
        self.extractors.insert(extractor.file_type(), extractor);
    }

    pub fn supports(&self, path: &Path) -> bool {
        FileType::from_path(path).is_some_and(|ft| self.extractors.contains_key(&ft))
    }

    /// Extract the text of `path`, returning its resolved file type alongside.
    pub fn extract(&self, path: &Path) -> Result<(FileType, String), ExtractionError> {
        let unsupported = || ExtractionError::UnsupportedFileType {
            path: path.display().to_string(),
        };
        let file_type = FileType::from_path(path).ok_or_else(unsupported)?;
        let extractor = self.extractors.get(&file_type).ok_or_else(unsupported)?;
        Ok((file_type, extractor.extract(path)?))
    }
}
