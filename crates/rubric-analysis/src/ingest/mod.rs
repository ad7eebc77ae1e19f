//! Reading documents from disk and wrapping reports in file-level records.

pub mod loader;
pub mod record;

pub use loader::{load_document, DocumentKind, LoadedDocument};
pub use record::{analyze_file, AnalysisRecord};
