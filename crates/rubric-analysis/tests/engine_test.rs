//! End-to-end tests of the nine-phase engine.

use rubric_analysis::advice::ImprovementCategory;
use rubric_analysis::compliance::ComplianceStatus;
use rubric_analysis::{analyze, AdrAnalyzer, Report};
use rubric_core::types::Priority;

fn body(words: usize) -> String {
    vec!["service"; words].join(" ")
}

/// A full mandatory set with long bodies and no optional sections scores 100.
#[test]
fn test_mandatory_sections_score_full_structure() {
    let text = ["Title", "Status", "Context", "Decision", "Consequences"]
        .iter()
        .map(|h| format!("# {}\n{}\n", h, body(120)))
        .collect::<String>();

    let report = analyze(&text);
    assert_eq!(report.structure.mandatory_sections_count, 5);
    assert_eq!(report.structure.structure_quality_score, 100.0);
    assert!(report.structure.optional_sections_found.is_empty());
    assert_eq!(report.quality.completeness_score, 100.0);
    assert_eq!(
        report.structure.detailed_findings,
        "Document has 5 sections. Mandatory sections present: 5/5."
    );
}

/// Empty input still yields every phase.
#[test]
fn test_empty_input_produces_baseline_report() {
    let report = analyze("");
    assert_eq!(report.structure.structure_quality_score, 0.0);
    assert_eq!(report.structure.mandatory_sections_missing.len(), 5);
    assert_eq!(report.quality.completeness_score, 0.0);
    assert_eq!(report.quality.overall_quality_score, 34.0);
    assert_eq!(report.authorship.confidence, 0.0);
    assert_eq!(report.enterprise.len(), 6);
    assert_eq!(report.design_patterns.len(), 9);
    assert_eq!(report.technical_debt.len(), 4);
    assert_eq!(report.maturity.overall_maturity_score, 30.0);
    assert_eq!(report.compliance.present_topics_count, 0);
    assert_eq!(report.compliance_percentage, 0.0);
}

/// Body text alone can satisfy a keyed compliance topic.
#[test]
fn test_rollback_keyword_satisfies_topic() {
    let report = analyze("# Decision\nWe keep a rollback script next to every migration.");
    let topic = report
        .compliance
        .topics
        .iter()
        .find(|t| t.topic_name == "Rollback Plan");
    assert_eq!(topic.map(|t| t.status), Some(ComplianceStatus::Present));
}

/// Six occurrences of one generic phrase trip the threshold; the indicator
/// appears once.
#[test]
fn test_repeated_generic_phrase_indicator_deduplicated() {
    let text = "it is important to note that we ship on fridays\n".repeat(6);
    let report = analyze(&text);
    assert!(report.authorship.confidence >= 18.0);
    let hits = report
        .authorship
        .ai_indicators
        .iter()
        .filter(|i| i.contains("it is important to note that"))
        .count();
    assert_eq!(hits, 1);
}

/// A single missing mandatory section yields one High "Missing Content"
/// suggestion ahead of every Medium or Low one.
#[test]
fn test_missing_decision_suggestion_first() {
    let text = "# Title\nQueue choice\n# Status\nAccepted\n# Context\nWe need a queue.\n\
                # Consequences\nOps must run it.";
    let report = analyze(text);

    let missing: Vec<_> = report
        .improvements
        .iter()
        .enumerate()
        .filter(|(_, s)| s.category == ImprovementCategory::MissingContent)
        .collect();
    assert_eq!(missing.len(), 1);
    let (index, suggestion) = missing[0];
    assert_eq!(suggestion.priority, Priority::High);
    assert!(suggestion.description.contains("Decision"));

    let first_non_high = report
        .improvements
        .iter()
        .position(|s| s.priority != Priority::High)
        .unwrap_or(report.improvements.len());
    assert!(index < first_non_high);
}

#[test]
fn test_rich_adr_scores() {
    let text = "\
# Title: ADR-7 Adopt Kafka for order events
## Status
Accepted
## Context
Order events are lost during deploys because the in-process queue is drained. See JIRA-311, ADR-4 and https://wiki.example.com/orders.
This depends on the platform team. Kafka is already run by platform.
## Decision
We will publish order events to Kafka. Kafka gives durable, replayable logs; therefore consumers can recover.
## Consequences
Operations will monitor consumer lag. The risk of broker failure is mitigated by replication.
## Alternatives
RabbitMQ was considered. RabbitMQ lacks replay.
## Rollback Plan
Revert the producer flag.
";
    let report = analyze(text);
    assert_eq!(report.structure.mandatory_sections_count, 5);
    assert_eq!(report.structure.optional_sections_found, vec!["Alternatives"]);
    assert!((report.structure.structure_quality_score - 80.4).abs() < 1e-9);
    assert!(report.quality.traceability_score > 50.0);
    assert!(!report.authorship.is_likely_ai_generated);
    assert!(report.compliance.present_topics_count >= 3);
    assert!(report
        .improvements
        .iter()
        .all(|s| s.category != ImprovementCategory::MissingContent));
}

#[test]
fn test_analysis_is_deterministic() {
    let text = "# Title\nX\n# Context\nBecause Kafka. Kafka will scale. See https://example.com";
    let analyzer = AdrAnalyzer::new(text);
    assert_eq!(analyzer.run(), analyzer.run());
    assert_eq!(analyze(text), analyze(text));
}

#[test]
fn test_json_uses_phase_keys() {
    let report = analyze("# Title\nOnly a title");
    let json = report.to_json(false).expect("serializes");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    for key in Report::phase_names() {
        assert!(value.get(*key).is_some(), "missing key {}", key);
    }
    assert!(value["overall_quality_score"].is_number());
    assert!(value["overall_maturity_score"].is_number());
    assert!(value["compliance_percentage"].is_number());

    assert_eq!(value["phase_4_improvements"][0]["category"], "Missing Content");
    assert_eq!(value["phase_5_enterprise"][0]["category"], "Strategic Alignment");
    assert!(value["phase_7_technical_debt"][0].get("type").is_some());
    assert_eq!(value["phase_8_maturity"]["maturity_level"], "Developing");
    assert_eq!(value["phase_9_compliance"]["topics"][0]["status"], "Missing");
}

#[test]
fn test_summary_matches_scalars() {
    let report = analyze("# Title\nA");
    let summary = report.summary();
    assert_eq!(summary.overall_quality_score, report.overall_quality_score);
    assert_eq!(summary.overall_maturity_score, report.overall_maturity_score);
    assert_eq!(summary.compliance_percentage, report.compliance_percentage);
}

/// A singular "Consequence" header sets the flag but leaves the section
/// missing, so it still draws a missing-content suggestion.
#[test]
fn test_singular_consequence_header_is_reported_missing() {
    let report = analyze("# Title\nA\n# Status\nB\n# Context\nC\n## Consequence\nD\n# Risks\nE");
    assert!(report.structure.has_consequences);
    assert_eq!(report.structure.mandatory_sections_count, 3);
    assert!((report.structure.structure_quality_score - 48.4).abs() < 1e-9);
    assert!(report
        .improvements
        .iter()
        .any(|s| s.description == "Add missing 'Consequences' section"));
}

#[test]
fn test_quality_dimensions_serialize_in_dimension_order() {
    let json = analyze("# Title\nA").to_json(false).expect("serializes");
    let start = json.find("\"quality_dimensions\"").expect("has dimensions");
    let tail = &json[start..];
    let positions: Vec<usize> = ["completeness", "clarity", "traceability", "consistency", "justification"]
        .iter()
        .map(|k| tail.find(&format!("\"{}\":", k)).expect("dimension key"))
        .collect();
    let mut sorted = positions.clone();
    sorted.sort();
    assert_eq!(positions, sorted);
}
