//! The five quality heuristics.
//!
//! Each starts from a fixed baseline, accumulates capped bonuses or
//! penalties, and is clamped to [0, 100] on its own.

use rubric_core::types::FxHashMap;

use crate::document::{Document, SectionMap};
use crate::patterns::{count_matches, RE_MAJOR_TERM, RE_PASSIVE_VOICE, REFERENCE_PATTERNS};
use crate::text::{clamp_score, count_keywords, count_occurrences, word_count};

/// Target average section length in words.
const COMPLETENESS_TARGET_WORDS: f64 = 100.0;

const DEPENDENCY_KEYWORDS: &[&str] = &["depends", "prerequisite", "related", "impact", "affects"];

const JUSTIFICATION_KEYWORDS: &[&str] = &[
    "because",
    "due to",
    "since",
    "therefore",
    "rationale",
    "reasoning",
    "justify",
];

const CONSEQUENCE_KEYWORDS: &[&str] = &["will", "may", "might", "could", "result", "impact", "effect"];

/// Number of most frequent capitalized terms considered for consistency.
const MAJOR_TERM_LIMIT: usize = 10;

/// Average words per section against a 100-word target.
pub fn completeness(sections: &SectionMap) -> f64 {
    if sections.is_empty() {
        return 0.0;
    }
    let total_words: usize = sections.bodies().map(word_count).sum();
    let avg = total_words as f64 / sections.len() as f64;
    clamp_score((avg / COMPLETENESS_TARGET_WORDS) * 100.0)
}

/// Structure present, short sentences, little passive voice.
pub fn clarity(document: &Document, sections: &SectionMap) -> f64 {
    let mut score = 50.0;

    if !sections.is_empty() {
        score += 20.0;
    }

    let sentences: Vec<&str> = document
        .text()
        .split('.')
        .filter(|s| !s.trim().is_empty())
        .collect();
    if !sentences.is_empty() {
        let total_words: usize = sentences.iter().map(|s| word_count(s)).sum();
        let avg = total_words as f64 / sentences.len() as f64;
        if avg < 25.0 {
            score += 20.0;
        } else if avg < 35.0 {
            score += 10.0;
        }
    }

    let passive = count_matches(&RE_PASSIVE_VOICE, document.text());
    score -= (passive as f64 * 2.0).min(10.0);

    clamp_score(score)
}

/// Links, ticket ids, and dependency language.
pub fn traceability(document: &Document) -> f64 {
    let mut score = 30.0;

    let references: usize = REFERENCE_PATTERNS
        .iter()
        .map(|p| count_matches(p, document.text()))
        .sum();
    score += (references as f64 * 5.0).min(40.0);

    let dependencies = count_keywords(document.lowercase(), DEPENDENCY_KEYWORDS);
    score += (dependencies as f64 * 3.0).min(30.0);

    clamp_score(score)
}

/// Spread of usage counts across the document's major terms.
///
/// A wide gap between the most and least used term reads as inconsistent
/// terminology. Title Case prose inflates the term list; that is part of
/// the rubric.
pub fn consistency(document: &Document) -> f64 {
    let mut score = 50.0;

    let frequencies: Vec<usize> = major_terms(document.text())
        .iter()
        .map(|term| count_occurrences(document.lowercase(), &term.to_lowercase()))
        .collect();

    if let (Some(max), Some(min)) = (frequencies.iter().max(), frequencies.iter().min()) {
        let spread = (max - min) as f64;
        score += 50.0 - spread.min(50.0);
    }

    clamp_score(score)
}

/// Explicit reasoning and consequence language.
pub fn justification(document: &Document) -> f64 {
    let mut score = 40.0;

    let reasons = count_keywords(document.lowercase(), JUSTIFICATION_KEYWORDS);
    score += (reasons as f64 * 5.0).min(40.0);

    let consequences = count_keywords(document.lowercase(), CONSEQUENCE_KEYWORDS);
    score += (consequences as f64 * 2.0).min(20.0);

    clamp_score(score)
}

/// Capitalized word runs, the ten most frequent, keeping those seen more
/// than once. Ties keep first-appearance order.
pub fn major_terms(text: &str) -> Vec<String> {
    let Some(re) = RE_MAJOR_TERM.as_ref() else {
        return Vec::new();
    };

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    let mut order: Vec<&str> = Vec::new();
    for m in re.find_iter(text) {
        let term = m.as_str();
        let count = counts.entry(term).or_insert(0);
        if *count == 0 {
            order.push(term);
        }
        *count += 1;
    }

    let mut ranked: Vec<(&str, usize)> = order.into_iter().map(|t| (t, counts[t])).collect();
    // Stable: equal counts stay in first-appearance order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAJOR_TERM_LIMIT)
        .filter(|(_, count)| *count > 1)
        .map(|(term, _)| term.to_string())
        .collect()
}
