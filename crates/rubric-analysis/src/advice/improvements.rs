//! Phase 4: actionable suggestions derived from phases 1 and 2.

use rubric_core::types::Priority;

use crate::document::SectionMap;
use crate::quality::QualityAssessmentResult;
use crate::structure::StructuralAnalysisResult;

use super::types::{ImprovementCategory, ImprovementSuggestion};

const CLARITY_THRESHOLD: f64 = 70.0;
const JUSTIFICATION_THRESHOLD: f64 = 70.0;
const TRACEABILITY_THRESHOLD: f64 = 60.0;

/// Build the suggestion list, High priority first.
///
/// Emission order is structure, one entry per missing mandatory section,
/// clarity, justification, traceability; the final sort is stable, so
/// entries of equal priority keep that order.
pub fn suggest_improvements(
    sections: &SectionMap,
    structure: &StructuralAnalysisResult,
    quality: &QualityAssessmentResult,
) -> Vec<ImprovementSuggestion> {
    let mut suggestions = Vec::new();

    if sections.is_empty() {
        suggestions.push(suggestion(
            Priority::High,
            ImprovementCategory::Structure,
            "Add markdown section headers for clarity",
            "Use # Title, ## Status, ## Context format",
            "Refactor content to use proper markdown headers for each section",
        ));
    }

    for missing in &structure.mandatory_sections_missing {
        let lower = missing.to_lowercase();
        suggestions.push(ImprovementSuggestion {
            priority: Priority::High,
            category: ImprovementCategory::MissingContent,
            description: format!("Add missing '{}' section", missing),
            specific_example: format!("## {}\n[Detailed content about {}]", missing, lower),
            implementation_guidance: format!("Create a new section that fully addresses {}", lower),
        });
    }

    if quality.clarity_score < CLARITY_THRESHOLD {
        suggestions.push(suggestion(
            Priority::Medium,
            ImprovementCategory::Clarity,
            "Improve clarity and readability",
            "Break long paragraphs into shorter sentences",
            "Review for passive voice and overly complex sentences",
        ));
    }

    if quality.justification_score < JUSTIFICATION_THRESHOLD {
        suggestions.push(suggestion(
            Priority::High,
            ImprovementCategory::Justification,
            "Strengthen decision rationale",
            "Add 'because' and 'therefore' statements",
            "Explicitly explain why this decision was made and what led to it",
        ));
    }

    if quality.traceability_score < TRACEABILITY_THRESHOLD {
        suggestions.push(suggestion(
            Priority::Medium,
            ImprovementCategory::Traceability,
            "Add references and linkages",
            "Link to related ADRs or JIRA tickets",
            "Include URLs, ticket numbers, and cross-references",
        ));
    }

    suggestions.sort_by_key(|s| s.priority.rank());
    suggestions
}

fn suggestion(
    priority: Priority,
    category: ImprovementCategory,
    description: &str,
    specific_example: &str,
    implementation_guidance: &str,
) -> ImprovementSuggestion {
    ImprovementSuggestion {
        priority,
        category,
        description: description.to_string(),
        specific_example: specific_example.to_string(),
        implementation_guidance: implementation_guidance.to_string(),
    }
}
