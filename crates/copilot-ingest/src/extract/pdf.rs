use std::path::Path;

use copilot_core::errors::ExtractionError;
use copilot_core::models::FileType;
use copilot_core::traits::ITextExtractor;

/// Stands in for a PDF text extractor: produces a fixed placeholder naming the
/// file. Register a real extractor for [`FileType::Pdf`] to replace it.
pub struct PdfPlaceholderExtractor;

impl PdfPlaceholderExtractor {
    pub fn placeholder_for(file_name: &str) -> String {
        format!(
            "[PDF Document: {file_name}]\n\n\
             This is a placeholder for PDF content extraction. \
             Register a PDF extractor to index the full text."
        )
    }
}

impl ITextExtractor for PdfPlaceholderExtractor {
    fn file_type(&self) -> FileType {
        FileType::Pdf
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        // The file must still exist and be readable.
        std::fs::metadata(path).map_err(|e| ExtractionError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::placeholder_for(&file_name))
    }
}
