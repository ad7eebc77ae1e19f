//! Error handling for rubric.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The analysis engine itself is total; these errors only arise at the
//! boundary (configuration, document ingestion, report rendering).

pub mod config_error;
pub mod error_code;
pub mod ingest_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use error_code::RubricErrorCode;
pub use ingest_error::IngestError;
pub use report_error::ReportError;
