//! Quality assessment entry point.

use crate::document::{Document, SectionMap};

use super::heuristics;
use super::types::QualityAssessmentResult;

/// Run all five quality heuristics.
pub fn assess_quality(document: &Document, sections: &SectionMap) -> QualityAssessmentResult {
    QualityAssessmentResult::from_scores(
        heuristics::completeness(sections),
        heuristics::clarity(document, sections),
        heuristics::traceability(document),
        heuristics::consistency(document),
        heuristics::justification(document),
    )
}
