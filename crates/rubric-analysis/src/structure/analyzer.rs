//! Mandatory/optional section detection and structure scoring.
//!
//! Scoring: `mandatory_ratio * 100`; when any optional section is present
//! the score becomes `0.8 * mandatory_ratio * 100 + 0.2 * (optional / 5) * 10`.
//! An ADR with every mandatory and optional section therefore scores 82.

use rubric_core::constants::{MANDATORY_SECTION_COUNT, OPTIONAL_SECTION_COUNT};

use crate::document::SectionMap;
use crate::text::clamp_score;

use super::types::StructuralAnalysisResult;

/// A rubric section and the lower-case substrings that detect it in a
/// section name.
///
/// `keyword` decides presence, the count and the score. `flag_keyword`
/// only drives the matching `has_*` flag and may be looser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionTopic {
    pub name: &'static str,
    pub keyword: &'static str,
    pub flag_keyword: &'static str,
}

const fn topic(name: &'static str, keyword: &'static str) -> SectionTopic {
    SectionTopic {
        name,
        keyword,
        flag_keyword: keyword,
    }
}

const fn flagged(name: &'static str, keyword: &'static str, flag_keyword: &'static str) -> SectionTopic {
    SectionTopic {
        name,
        keyword,
        flag_keyword,
    }
}

pub const MANDATORY_SECTIONS: [SectionTopic; MANDATORY_SECTION_COUNT] = [
    topic("Title", "title"),
    topic("Status", "status"),
    topic("Context", "context"),
    topic("Decision", "decision"),
    // A singular "Consequence" header sets the flag but is not counted.
    flagged("Consequences", "consequences", "consequenc"),
];

pub const OPTIONAL_SECTIONS: [SectionTopic; OPTIONAL_SECTION_COUNT] = [
    topic("Alternatives", "alternatives"),
    topic("Assumptions", "assumptions"),
    topic("Constraints", "constraints"),
    topic("Risks", "risks"),
    topic("Stakeholders", "stakeholders"),
];

const MANDATORY_WEIGHT: f64 = 0.8;
const OPTIONAL_WEIGHT: f64 = 0.2;
const OPTIONAL_SCALE: f64 = 10.0;

/// Run the structural analysis over a section map.
pub fn analyze_structure(sections: &SectionMap) -> StructuralAnalysisResult {
    let mut present = Vec::new();
    let mut missing = Vec::new();
    let mut flags = [false; MANDATORY_SECTION_COUNT];

    for (i, topic) in MANDATORY_SECTIONS.iter().enumerate() {
        flags[i] = sections.any_name_contains(topic.flag_keyword);
        if sections.any_name_contains(topic.keyword) {
            present.push(topic.name.to_string());
        } else {
            missing.push(topic.name.to_string());
        }
    }

    let optional_found: Vec<String> = OPTIONAL_SECTIONS
        .iter()
        .filter(|topic| sections.any_name_contains(topic.keyword))
        .map(|topic| topic.name.to_string())
        .collect();

    let mandatory_ratio = present.len() as f64 / MANDATORY_SECTIONS.len() as f64;
    let mut score = mandatory_ratio * 100.0;
    if !optional_found.is_empty() {
        let optional_ratio = optional_found.len() as f64 / OPTIONAL_SECTIONS.len() as f64;
        score = score * MANDATORY_WEIGHT + optional_ratio * OPTIONAL_SCALE * OPTIONAL_WEIGHT;
    }

    let detailed_findings = format!(
        "Document has {} sections. Mandatory sections present: {}/{}.",
        sections.len(),
        present.len(),
        MANDATORY_SECTIONS.len()
    );

    let [has_title, has_status, has_context, has_decision, has_consequences] = flags;

    StructuralAnalysisResult {
        has_title,
        has_status,
        has_context,
        has_decision,
        has_consequences,
        mandatory_sections_count: present.len(),
        mandatory_sections_present: present,
        mandatory_sections_missing: missing,
        optional_sections_found: optional_found,
        structure_quality_score: clamp_score(score),
        detailed_findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn structure_of(text: &str) -> StructuralAnalysisResult {
        analyze_structure(&SectionMap::extract(&Document::new(text)))
    }

    #[test]
    fn test_all_mandatory_no_optional_scores_100() {
        let r = structure_of("# Title\na\n# Status\nb\n# Context\nc\n# Decision\nd\n# Consequences\ne");
        assert_eq!(r.mandatory_sections_count, 5);
        assert!(r.mandatory_sections_missing.is_empty());
        assert_eq!(r.structure_quality_score, 100.0);
        assert!(r.has_title && r.has_status && r.has_context && r.has_decision && r.has_consequences);
    }

    #[test]
    fn test_optional_sections_reweight_score() {
        let r = structure_of(
            "# Title\n# Status\n# Context\n# Decision\n# Consequences\n# Alternatives\n# Risks",
        );
        assert_eq!(r.optional_sections_found, vec!["Alternatives", "Risks"]);
        // 0.8 * 100 + 0.2 * (2/5) * 10
        assert!((r.structure_quality_score - 80.8).abs() < 1e-9);
    }

    #[test]
    fn test_all_sections_cap_at_82() {
        let r = structure_of(
            "# Title\n# Status\n# Context\n# Decision\n# Consequences\n\
             # Alternatives\n# Assumptions\n# Constraints\n# Risks\n# Stakeholders",
        );
        assert!((r.structure_quality_score - 82.0).abs() < 1e-9);
    }

    #[test]
    fn test_singular_consequence_header_sets_flag_only() {
        let r = structure_of("## Consequence\nx");
        assert!(r.has_consequences);
        assert_eq!(r.mandatory_sections_count, 0);
        assert!(r.mandatory_sections_present.is_empty());
        assert!(r.mandatory_sections_missing.contains(&"Consequences".to_string()));
        assert_eq!(r.structure_quality_score, 0.0);
    }

    #[test]
    fn test_singular_consequence_lowers_score() {
        let r = structure_of("# Title\na\n# Status\nb\n# Context\nc\n## Consequence\nd\n# Risks\ne");
        assert!(r.has_consequences);
        assert_eq!(r.mandatory_sections_missing, vec!["Decision", "Consequences"]);
        // 0.8 * 60 + 0.2 * (1/5) * 10
        assert!((r.structure_quality_score - 48.4).abs() < 1e-9);
    }

    #[test]
    fn test_substring_match_in_longer_header() {
        let r = structure_of("## Decision Drivers and Context\nx");
        assert!(r.has_decision);
        assert!(r.has_context);
        assert_eq!(r.mandatory_sections_count, 2);
    }

    #[test]
    fn test_empty_document_scores_zero() {
        let r = structure_of("");
        assert_eq!(r.structure_quality_score, 0.0);
        assert_eq!(r.mandatory_sections_missing.len(), 5);
        assert_eq!(r.detailed_findings, "Document has 0 sections. Mandatory sections present: 0/5.");
    }
}
