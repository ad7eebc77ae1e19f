//! Compiled regular expressions used by the heuristics.
//!
//! Each pattern compiles lazily once per process. A pattern that fails to
//! compile yields `None` and simply produces no matches.

use std::sync::LazyLock;

use regex::Regex;

macro_rules! text_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── Clarity ────────────────────────────────────────────────────────────────
// "is/was/were" followed by a word ending in "en". Coarse on purpose.
text_pattern!(
    RE_PASSIVE_VOICE,
    r"(?i)\bis\s+\w+en\b|\bwas\s+\w+en\b|\bwere\s+\w+en\b"
);

// ── Traceability references ────────────────────────────────────────────────
text_pattern!(RE_URL, r"https?://\S+");
text_pattern!(RE_NUMERIC_ANCHOR, r"#\d+");
text_pattern!(RE_ADR_ID, r"ADR-\d+");
text_pattern!(RE_JIRA_ID, r"JIRA-\d+");
text_pattern!(RE_ISSUE_REF, r"issue\s+#\d+");

/// Reference patterns counted independently (an "issue #12" also counts as
/// a numeric anchor).
pub static REFERENCE_PATTERNS: [&LazyLock<Option<Regex>>; 5] = [
    &RE_URL,
    &RE_NUMERIC_ANCHOR,
    &RE_ADR_ID,
    &RE_JIRA_ID,
    &RE_ISSUE_REF,
];

// ── Consistency ────────────────────────────────────────────────────────────
// Runs of capitalized words, e.g. "Event Store" or "Kafka".
text_pattern!(RE_MAJOR_TERM, r"\b[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*\b");

// ── Authorship ─────────────────────────────────────────────────────────────
text_pattern!(RE_SENTENCE_START, r"[.!?]\s+[A-Z]");
text_pattern!(RE_SENTENCE_END, r"[.!?]");

/// Number of non-overlapping matches; zero when the pattern is unavailable.
pub fn count_matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> usize {
    let Some(re) = pattern.as_ref() else { return 0 };
    re.find_iter(text).count()
}
