//! Load a document from disk.

use std::path::{Path, PathBuf};

use rubric_core::config::IngestConfig;
use rubric_core::errors::IngestError;
use serde::{Deserialize, Serialize};

/// How the source file was written. Both kinds are analyzed the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Markdown,
}

impl DocumentKind {
    /// Kind implied by a file extension; anything not markdown is text.
    pub fn from_extension(extension: &str) -> Self {
        if extension.eq_ignore_ascii_case("md") || extension.eq_ignore_ascii_case("markdown") {
            Self::Markdown
        } else {
            Self::Text
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Markdown => "markdown",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Text read from disk, with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDocument {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: DocumentKind,
    pub text: String,
}

/// Read `path` as a document.
///
/// Checks run in order: existence, extension allow-list, size limit,
/// UTF-8 decoding.
pub fn load_document(path: &Path, config: &IngestConfig) -> Result<LoadedDocument, IngestError> {
    let metadata = std::fs::metadata(path).map_err(|e| io_error(path, e))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_string();
    if !config.accepts_extension(&extension) {
        return Err(IngestError::UnsupportedExtension {
            path: path.to_path_buf(),
            extension,
        });
    }

    let limit = config.effective_max_document_bytes();
    if metadata.len() > limit {
        return Err(IngestError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
    })?;

    let kind = DocumentKind::from_extension(&extension);
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    tracing::debug!(path = %path.display(), kind = %kind, bytes = text.len(), "document loaded");

    Ok(LoadedDocument {
        path: path.to_path_buf(),
        file_name,
        kind,
        text,
    })
}

fn io_error(path: &Path, source: std::io::Error) -> IngestError {
    if source.kind() == std::io::ErrorKind::NotFound {
        IngestError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
