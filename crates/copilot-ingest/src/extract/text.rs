use std::path::Path;

use copilot_core::errors::ExtractionError;
use copilot_core::models::FileType;
use copilot_core::traits::ITextExtractor;

/// Reads the file as UTF-8, replacing invalid sequences.
pub struct PlainTextExtractor {
    file_type: FileType,
}

impl PlainTextExtractor {
    pub fn new(file_type: FileType) -> Self {
        Self { file_type }
    }
}

impl ITextExtractor for PlainTextExtractor {
    fn file_type(&self) -> FileType {
        self.file_type
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let bytes = std::fs::read(path).map_err(|e| ExtractionError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
