//! Phase 8: architecture maturity scoring.

pub mod scorer;
pub mod types;

pub use scorer::{risk_assessment, score_maturity};
pub use types::{ArchitectureMaturityResult, MaturityLevel};
