//! Maturity dimensions and improvement pathway.
//!
//! Three dimensions are reused from phase 2: documentation quality is
//! completeness, decision rationale is justification, and alternative
//! analysis is consistency. Risk assessment is scored here.

use crate::document::Document;
use crate::quality::QualityAssessmentResult;
use crate::text::{clamp_score, count_keywords};

use super::types::{ArchitectureMaturityResult, MaturityLevel};

const RISK_KEYWORDS: &[&str] = &[
    "risk",
    "mitigation",
    "threat",
    "vulnerability",
    "impact",
    "consequence",
    "failure",
];

const MITIGATION_KEYWORDS: &[&str] = &["mitigate", "prevent", "monitor", "control", "contingency"];

/// Dimensions below this contribute a pathway entry.
const PATHWAY_THRESHOLD: f64 = 70.0;

pub fn score_maturity(document: &Document, quality: &QualityAssessmentResult) -> ArchitectureMaturityResult {
    let documentation_quality = quality.completeness_score;
    let decision_rationale = quality.justification_score;
    let risk = risk_assessment(document);
    let alternative_analysis = quality.consistency_score;

    let overall = (documentation_quality + decision_rationale + risk + alternative_analysis) / 4.0;

    let mut pathway = Vec::new();
    if documentation_quality < PATHWAY_THRESHOLD {
        pathway.push("Improve documentation completeness and detail".to_string());
    }
    if decision_rationale < PATHWAY_THRESHOLD {
        pathway.push("Strengthen decision justification and rationale".to_string());
    }
    if risk < PATHWAY_THRESHOLD {
        pathway.push("Add comprehensive risk assessment and mitigation strategies".to_string());
    }
    if alternative_analysis < PATHWAY_THRESHOLD {
        pathway.push("Document alternatives evaluation and tradeoffs".to_string());
    }
    if pathway.is_empty() {
        pathway.push("Maintain high standards and seek continuous improvement".to_string());
    }

    ArchitectureMaturityResult {
        overall_maturity_score: overall,
        maturity_level: MaturityLevel::from_score(overall),
        documentation_quality,
        decision_rationale,
        risk_assessment: risk,
        alternative_analysis,
        improvement_pathway: pathway,
    }
}

/// Risk identification (+3 per keyword, capped at 50) and mitigation
/// language (+4 per keyword, capped at 20) over a baseline of 30.
pub fn risk_assessment(document: &Document) -> f64 {
    let mut score = 30.0;

    let risks = count_keywords(document.lowercase(), RISK_KEYWORDS);
    score += (risks as f64 * 3.0).min(50.0);

    let mitigations = count_keywords(document.lowercase(), MITIGATION_KEYWORDS);
    score += (mitigations as f64 * 4.0).min(20.0);

    clamp_score(score)
}
