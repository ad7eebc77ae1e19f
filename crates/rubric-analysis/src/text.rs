//! Small text-counting primitives shared by the heuristics.
//!
//! Counts are non-overlapping substring counts, so a keyword also counts
//! inside longer words ("will" in "willing"). The rubric is calibrated
//! against that behaviour.

/// Non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Sum of [`count_occurrences`] over every keyword.
pub fn count_keywords(haystack: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .map(|kw| count_occurrences(haystack, kw))
        .sum()
}

/// Whitespace-delimited word count.
pub fn word_count(s: &str) -> usize {
    s.split_whitespace().count()
}

/// Clamp a score into `[0, 100]`.
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}
