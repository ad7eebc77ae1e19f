//! # rubric-analysis
//!
//! Nine-phase analysis engine for Architecture Decision Records.
//! Section extraction feeds structural, quality, authorship, advisory,
//! technical-debt, maturity, and standards-compliance phases; the
//! orchestrator assembles them into a single deterministic report.

pub mod advice;
pub mod authorship;
pub mod compliance;
pub mod debt;
pub mod document;
pub mod engine;
pub mod ingest;
pub mod maturity;
pub mod patterns;
pub mod quality;
pub mod structure;
pub mod text;

pub use engine::{analyze, analyze_batch, AdrAnalyzer, Report, ReportSummary};
pub use ingest::{analyze_file, load_document, AnalysisRecord};
