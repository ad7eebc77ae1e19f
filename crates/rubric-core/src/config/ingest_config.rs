//! Document ingestion configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ALLOWED_EXTENSIONS, DEFAULT_MAX_DOCUMENT_BYTES};

/// Configuration for loading documents from disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Maximum document size in bytes. Default: 1MB.
    pub max_document_bytes: Option<u64>,
    /// Accepted file extensions, without the leading dot.
    #[serde(default)]
    pub allowed_extensions: Vec<String>,
}

impl IngestConfig {
    /// Returns the effective size limit, defaulting to 1MB.
    pub fn effective_max_document_bytes(&self) -> u64 {
        self.max_document_bytes.unwrap_or(DEFAULT_MAX_DOCUMENT_BYTES)
    }

    /// Returns the effective extension allow-list.
    pub fn effective_allowed_extensions(&self) -> Vec<String> {
        if self.allowed_extensions.is_empty() {
            DEFAULT_ALLOWED_EXTENSIONS.iter().map(|e| e.to_string()).collect()
        } else {
            self.allowed_extensions.clone()
        }
    }

    /// Case-insensitive extension check against the effective allow-list.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.effective_allowed_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(extension))
    }
}
