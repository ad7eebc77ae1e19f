//! Phase 1: structural completeness of an ADR.

pub mod analyzer;
pub mod types;

pub use analyzer::{analyze_structure, SectionTopic, MANDATORY_SECTIONS, OPTIONAL_SECTIONS};
pub use types::StructuralAnalysisResult;
