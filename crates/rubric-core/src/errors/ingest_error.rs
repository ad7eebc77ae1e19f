//! Document ingestion errors.

use std::path::PathBuf;

use super::error_code::{self, RubricErrorCode};

/// Errors that can occur while turning a file into analyzable text.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Document not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Document {path} is {size} bytes, limit is {limit}")]
    TooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Unsupported document extension '{extension}' for {path}")]
    UnsupportedExtension { path: PathBuf, extension: String },

    #[error("Document {path} is not valid UTF-8 text")]
    InvalidUtf8 { path: PathBuf },
}

impl RubricErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::TooLarge { .. } => error_code::DOCUMENT_TOO_LARGE,
            Self::UnsupportedExtension { .. } | Self::InvalidUtf8 { .. } => {
                error_code::UNSUPPORTED_FORMAT
            }
            _ => error_code::INGEST_ERROR,
        }
    }
}
