//! Phase 3: heuristic detection of generated-sounding prose.

pub mod detector;
pub mod types;

pub use detector::{detect_authorship, GENERIC_PHRASES};
pub use types::LlmDetectionResult;
