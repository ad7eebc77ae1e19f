//! Authorship-pattern signals.
//!
//! Four independent signals accumulate into a confidence value:
//! - generic filler phrases (more than 5 occurrences: +3 each)
//! - adjacent lines that differ only in their last word (+5 once)
//! - near-perfect sentence capitalization (ratio above 0.9: +10)
//! - corporate jargon (more than 3 occurrences: +2 each)

use crate::document::Document;
use crate::patterns::{count_matches, RE_SENTENCE_END, RE_SENTENCE_START};
use crate::text::{clamp_score, count_keywords};

use super::types::LlmDetectionResult;

pub const GENERIC_PHRASES: &[&str] = &[
    "it is important to note that",
    "in conclusion",
    "furthermore",
    "in summary",
    "it should be noted that",
    "the significance of",
    "in light of",
    "as a result",
    "additionally",
    "in this context",
    "the implementation of",
    "positive impacts",
    "negative impacts",
    "various stakeholders",
    "best practices",
    "comprehensive approach",
    "scalable solution",
    "seamless integration",
    "robust architecture",
    "innovative approach",
];

const CORPORATE_JARGON: &[&str] = &["leverage", "synergy", "paradigm", "ecosystem", "holistic", "seamless"];

const GENERIC_PHRASE_THRESHOLD: usize = 5;
const GENERIC_PHRASE_WEIGHT: f64 = 3.0;

/// Repetition is only checked in documents with more than this many
/// non-blank lines.
const REPETITION_MIN_LINES: usize = 5;
/// Both lines of a pair must be longer than this (in characters).
const REPETITION_MIN_LINE_CHARS: usize = 10;
const REPETITION_WEIGHT: f64 = 5.0;

const PUNCTUATION_RATIO_THRESHOLD: f64 = 0.9;
const PUNCTUATION_WEIGHT: f64 = 10.0;

const JARGON_THRESHOLD: usize = 3;
const JARGON_WEIGHT: f64 = 2.0;

const AI_CONFIDENCE_THRESHOLD: f64 = 50.0;

/// Detect generated-sounding prose in a document.
pub fn detect_authorship(document: &Document) -> LlmDetectionResult {
    let mut confidence = 0.0;
    let mut indicators = Vec::new();

    let generic_count = count_keywords(document.lowercase(), GENERIC_PHRASES);
    if generic_count > GENERIC_PHRASE_THRESHOLD {
        confidence += generic_count as f64 * GENERIC_PHRASE_WEIGHT;
        for phrase in GENERIC_PHRASES {
            if document.lowercase().contains(phrase) {
                indicators.push(format!("Generic phrase: '{}'", phrase));
            }
        }
    }

    if has_repetitive_structure(document) {
        confidence += REPETITION_WEIGHT;
        indicators.push("Repetitive sentence structure detected".to_string());
    }

    if let Some(ratio) = capitalization_ratio(document.text()) {
        if ratio > PUNCTUATION_RATIO_THRESHOLD {
            confidence += PUNCTUATION_WEIGHT;
            indicators.push("Consistently perfect punctuation and capitalization".to_string());
        }
    }

    let jargon_count = count_keywords(document.lowercase(), CORPORATE_JARGON);
    if jargon_count > JARGON_THRESHOLD {
        confidence += jargon_count as f64 * JARGON_WEIGHT;
        indicators.push(format!("High corporate jargon usage ({} terms)", jargon_count));
    }

    let confidence = clamp_score(confidence);
    let analysis_text = format!(
        "Confidence score: {}. Detected {} AI-like indicators.",
        confidence,
        indicators.len()
    );

    LlmDetectionResult {
        confidence,
        is_likely_ai_generated: confidence > AI_CONFIDENCE_THRESHOLD,
        ai_indicators: indicators,
        analysis_text,
    }
}

/// True if two adjacent non-blank lines share every word but the last.
fn has_repetitive_structure(document: &Document) -> bool {
    let lines: Vec<&str> = document
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if lines.len() <= REPETITION_MIN_LINES {
        return false;
    }

    lines.windows(2).any(|pair| {
        let (a, b) = (pair[0], pair[1]);
        a.chars().count() > REPETITION_MIN_LINE_CHARS
            && b.chars().count() > REPETITION_MIN_LINE_CHARS
            && leading_words(a) == leading_words(b)
    })
}

/// All words except the last. Two single-word lines compare equal.
fn leading_words(line: &str) -> Vec<&str> {
    let mut words: Vec<&str> = line.split_whitespace().collect();
    words.pop();
    words
}

/// Share of sentence-ending punctuation followed by whitespace and a
/// capital letter. `None` when no such transition exists.
fn capitalization_ratio(text: &str) -> Option<f64> {
    let proper = count_matches(&RE_SENTENCE_START, text);
    if proper == 0 {
        return None;
    }
    let total = count_matches(&RE_SENTENCE_END, text);
    if total == 0 {
        return None;
    }
    Some(proper as f64 / total as f64)
}
