use std::path::Path;

use crate::errors::ExtractionError;
use crate::models::FileType;

/// Turns a source file into plain text.
pub trait ITextExtractor: Send + Sync {
    /// The file type this extractor handles.
    fn file_type(&self) -> FileType;

    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;
}
