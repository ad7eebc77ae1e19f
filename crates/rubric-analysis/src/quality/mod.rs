//! Phase 2: writing-quality assessment.
//!
//! Five independent heuristics (completeness, clarity, traceability,
//! consistency, justification), each clamped to [0, 100], averaged into
//! the overall quality score.

pub mod assessor;
pub mod heuristics;
pub mod types;

pub use assessor::assess_quality;
pub use types::{QualityAssessmentResult, QualityDimension, QualityDimensions};
