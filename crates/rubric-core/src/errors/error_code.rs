//! RubricErrorCode trait for structured error reporting at API boundaries.

/// Trait for mapping rubric errors to stable error code strings.
/// Every error enum implements this so embedding hosts can branch on a
/// code instead of parsing messages.
pub trait RubricErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted coded string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const DOCUMENT_TOO_LARGE: &str = "DOCUMENT_TOO_LARGE";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
