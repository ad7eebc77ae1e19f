//! Debt derivation rules.
//!
//! Items are emitted in a fixed order: documentation, architectural,
//! knowledge, design, code.

use rubric_core::types::{Effort, Priority};

use crate::authorship::LlmDetectionResult;
use crate::document::SectionMap;
use crate::quality::QualityAssessmentResult;

use super::types::{DebtType, TechnicalDebtItem};

const QUALITY_THRESHOLD: f64 = 60.0;
const MIN_SECTIONS: usize = 5;
const AUTHORSHIP_THRESHOLD: f64 = 60.0;
const JUSTIFICATION_THRESHOLD: f64 = 70.0;
const TRACEABILITY_THRESHOLD: f64 = 60.0;

pub fn analyze_debt(
    sections: &SectionMap,
    quality: &QualityAssessmentResult,
    authorship: &LlmDetectionResult,
) -> Vec<TechnicalDebtItem> {
    let mut items = Vec::new();

    if quality.overall_quality_score < QUALITY_THRESHOLD {
        items.push(item(
            DebtType::Documentation,
            Priority::High,
            "Documentation lacks completeness and clarity",
            "Increases onboarding time and decision ambiguity",
            "Systematically improve each section with specific examples and rationale",
            Effort::Medium,
        ));
    }

    if sections.len() < MIN_SECTIONS {
        items.push(item(
            DebtType::Architectural,
            Priority::High,
            "ADR lacks proper architectural documentation structure",
            "Makes it difficult to govern and evolve architecture",
            "Restructure into proper ADR format with all required sections",
            Effort::High,
        ));
    }

    if authorship.confidence > AUTHORSHIP_THRESHOLD {
        items.push(item(
            DebtType::Knowledge,
            Priority::Medium,
            "ADR may lack authentic domain expertise insights",
            "Decisions may not account for organizational specifics",
            "Review and enhance with team expertise and organizational context",
            Effort::Medium,
        ));
    }

    if quality.justification_score < JUSTIFICATION_THRESHOLD {
        items.push(item(
            DebtType::Design,
            Priority::High,
            "Decision rationale is not clearly documented",
            "Future maintainers may not understand decision context",
            "Add explicit rationale, tradeoffs, and alternatives analysis",
            Effort::Medium,
        ));
    }

    if quality.traceability_score < TRACEABILITY_THRESHOLD {
        items.push(item(
            DebtType::Code,
            Priority::Medium,
            "Lacks linkage to implementation and related decisions",
            "Difficult to trace decisions to code and maintain consistency",
            "Add references to code, related ADRs, and tracking tickets",
            Effort::Low,
        ));
    }

    items
}

fn item(
    debt_type: DebtType,
    severity: Priority,
    description: &str,
    impact: &str,
    remediation_strategy: &str,
    estimated_effort: Effort,
) -> TechnicalDebtItem {
    TechnicalDebtItem {
        debt_type,
        severity,
        description: description.to_string(),
        impact: impact.to_string(),
        remediation_strategy: remediation_strategy.to_string(),
        estimated_effort,
    }
}
