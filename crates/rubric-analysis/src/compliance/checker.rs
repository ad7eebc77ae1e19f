//! Topic-by-topic compliance check.

use rubric_core::constants::PRIORITY_IMPROVEMENT_LIMIT;

use crate::document::{Document, SectionMap};

use super::catalog::{keyword_present, STANDARD_TOPICS};
use super::types::{ComplianceStatus, StandardsComplianceResult, StandardsComplianceTopic};

/// Check every standard topic.
///
/// A topic is present when its space-stripped lower-case name is a
/// substring of some space-stripped section name, or, for keyed topics,
/// when any keyword occurs in the document body.
pub fn check_compliance(document: &Document, sections: &SectionMap) -> StandardsComplianceResult {
    let section_keys: Vec<String> = sections.names().map(|n| n.replace(' ', "")).collect();

    let topics: Vec<StandardsComplianceTopic> = STANDARD_TOPICS
        .iter()
        .enumerate()
        .map(|(i, topic)| {
            let key = topic.section_key();
            let present = section_keys.iter().any(|s| s.contains(&key))
                || keyword_present(i, document.lowercase());

            if present {
                StandardsComplianceTopic {
                    topic_name: topic.name.to_string(),
                    topic_description: format!("Requirement: {}", topic.name),
                    status: ComplianceStatus::Present,
                    content_summary: "Included in ADR".to_string(),
                    recommendations: String::new(),
                }
            } else {
                StandardsComplianceTopic {
                    topic_name: topic.name.to_string(),
                    topic_description: format!("Requirement: {}", topic.name),
                    status: ComplianceStatus::Missing,
                    content_summary: "Not addressed".to_string(),
                    recommendations: format!("Add '{}' section with details", topic.name),
                }
            }
        })
        .collect();

    let present = topics.iter().filter(|t| t.status.is_present()).count();
    let total = topics.len();

    let priority_improvements = topics
        .iter()
        .filter(|t| !t.status.is_present())
        .take(PRIORITY_IMPROVEMENT_LIMIT)
        .map(|t| t.topic_name.clone())
        .collect();

    StandardsComplianceResult {
        total_topics: total,
        present_topics_count: present,
        missing_topics_count: total - present,
        compliance_percentage: present as f64 / total as f64 * 100.0,
        topics,
        priority_improvements,
    }
}
