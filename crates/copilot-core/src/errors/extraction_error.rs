use super::error_code::{self, ErrorCode};

/// Text extraction errors. Reported per file during batch ingestion.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported file type: {path}")]
    UnsupportedFileType { path: String },

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("no text could be extracted from {path}")]
    EmptyContent { path: String },
}

impl ErrorCode for ExtractionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFileType { .. } => error_code::UNSUPPORTED_FILE_TYPE,
            Self::ReadFailed { .. } | Self::EmptyContent { .. } => error_code::EXTRACTION_ERROR,
        }
    }
}
