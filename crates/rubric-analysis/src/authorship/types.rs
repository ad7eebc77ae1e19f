//! Authorship detection result.

use serde::{Deserialize, Serialize};

/// Confidence that the prose is machine-generated, with the signals that
/// contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmDetectionResult {
    /// 0-100.
    pub confidence: f64,
    /// `confidence > 50`.
    pub is_likely_ai_generated: bool,
    pub ai_indicators: Vec<String>,
    pub analysis_text: String,
}
