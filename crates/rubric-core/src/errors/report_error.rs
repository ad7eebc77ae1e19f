//! Report rendering errors.

use super::error_code::{self, RubricErrorCode};

/// Errors that can occur while rendering a finished report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report serialization failed: {0}")]
    Serialization(String),
}

impl RubricErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
