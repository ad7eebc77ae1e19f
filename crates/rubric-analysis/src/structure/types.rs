//! Structural analysis result.

use serde::{Deserialize, Serialize};

/// Presence of mandatory/optional sections and the derived structure score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralAnalysisResult {
    pub has_title: bool,
    pub has_status: bool,
    pub has_context: bool,
    pub has_decision: bool,
    pub has_consequences: bool,
    pub mandatory_sections_count: usize,
    pub mandatory_sections_present: Vec<String>,
    pub mandatory_sections_missing: Vec<String>,
    pub optional_sections_found: Vec<String>,
    /// 0-100.
    pub structure_quality_score: f64,
    pub detailed_findings: String,
}
