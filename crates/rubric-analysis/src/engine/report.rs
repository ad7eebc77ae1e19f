//! The report produced by a full analysis run.

use rubric_core::errors::ReportError;
use serde::{Deserialize, Serialize};

use crate::advice::{DesignPattern, EnterpriseArchitectureSuggestion, ImprovementSuggestion};
use crate::authorship::LlmDetectionResult;
use crate::compliance::StandardsComplianceResult;
use crate::debt::TechnicalDebtItem;
use crate::maturity::ArchitectureMaturityResult;
use crate::quality::QualityAssessmentResult;
use crate::structure::StructuralAnalysisResult;

/// Serialized keys of the nine phases, in execution order.
pub const PHASE_NAMES: [&str; 9] = [
    "phase_1_structural_analysis",
    "phase_2_quality_assessment",
    "phase_3_llm_detection",
    "phase_4_improvements",
    "phase_5_enterprise",
    "phase_6_design_patterns",
    "phase_7_technical_debt",
    "phase_8_maturity",
    "phase_9_compliance",
];

/// All nine phase results plus three convenience scalars.
///
/// The scalars duplicate values inside the phase results; they are what
/// downstream persistence reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(rename = "phase_1_structural_analysis")]
    pub structure: StructuralAnalysisResult,
    #[serde(rename = "phase_2_quality_assessment")]
    pub quality: QualityAssessmentResult,
    #[serde(rename = "phase_3_llm_detection")]
    pub authorship: LlmDetectionResult,
    #[serde(rename = "phase_4_improvements")]
    pub improvements: Vec<ImprovementSuggestion>,
    #[serde(rename = "phase_5_enterprise")]
    pub enterprise: Vec<EnterpriseArchitectureSuggestion>,
    #[serde(rename = "phase_6_design_patterns")]
    pub design_patterns: Vec<DesignPattern>,
    #[serde(rename = "phase_7_technical_debt")]
    pub technical_debt: Vec<TechnicalDebtItem>,
    #[serde(rename = "phase_8_maturity")]
    pub maturity: ArchitectureMaturityResult,
    #[serde(rename = "phase_9_compliance")]
    pub compliance: StandardsComplianceResult,
    pub overall_quality_score: f64,
    pub overall_maturity_score: f64,
    pub compliance_percentage: f64,
}

/// The three headline scores of a report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub overall_quality_score: f64,
    pub overall_maturity_score: f64,
    pub compliance_percentage: f64,
}

impl Report {
    pub fn phase_names() -> &'static [&'static str] {
        &PHASE_NAMES
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            overall_quality_score: self.overall_quality_score,
            overall_maturity_score: self.overall_maturity_score,
            compliance_percentage: self.compliance_percentage,
        }
    }

    /// Render as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String, ReportError> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| ReportError::Serialization(e.to_string()))
    }
}
