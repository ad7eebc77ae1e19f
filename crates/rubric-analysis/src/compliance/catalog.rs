//! The 24-topic standard and the keyword automata for topics that can be
//! satisfied by body text alone.

use std::sync::LazyLock;

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};

/// A standard topic. Non-empty `keywords` let the topic count as present
/// when any keyword appears anywhere in the lower-cased document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardTopic {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

const fn topic(name: &'static str) -> StandardTopic {
    StandardTopic { name, keywords: &[] }
}

const fn keyed(name: &'static str, keywords: &'static [&'static str]) -> StandardTopic {
    StandardTopic { name, keywords }
}

pub const STANDARD_TOPICS: [StandardTopic; 24] = [
    topic("Title and Identifier"),
    topic("Status"),
    topic("Context and Background"),
    topic("Decision Statement"),
    topic("Consequences"),
    topic("Alternatives Considered"),
    topic("Assumptions"),
    topic("Constraints"),
    keyed("Risks and Mitigations", &["risk", "mitigation", "threat"]),
    topic("Stakeholders"),
    keyed("Timeline and Milestones", &["timeline", "milestone", "schedule", "date"]),
    keyed("Success Metrics", &["metric", "kpi", "measurement", "success"]),
    topic("Dependencies"),
    topic("Cost Analysis"),
    keyed("Security Considerations", &["security", "encrypt", "auth"]),
    keyed("Compliance Requirements", &["compliance", "regulation", "standard"]),
    topic("Scalability Considerations"),
    topic("Performance Impact"),
    topic("Maintainability Impact"),
    topic("Testing Strategy"),
    keyed("Rollback Plan", &["rollback", "fallback", "revert"]),
    keyed("Monitoring and Observability", &["monitoring", "observability", "alert", "metric"]),
    topic("Documentation and Knowledge Transfer"),
    topic("Review and Approval Process"),
];

/// One automaton per topic, indexed like `STANDARD_TOPICS`. `None` for
/// topics without keywords or when the automaton fails to build.
static KEYWORD_MATCHERS: LazyLock<Vec<Option<AhoCorasick>>> = LazyLock::new(|| {
    STANDARD_TOPICS
        .iter()
        .map(|t| build_matcher(t.keywords))
        .collect()
});

fn build_matcher(keywords: &[&str]) -> Option<AhoCorasick> {
    if keywords.is_empty() {
        return None;
    }
    AhoCorasickBuilder::new().build(keywords).ok()
}

impl StandardTopic {
    /// Lower-cased name with spaces removed, compared against section names.
    pub fn section_key(&self) -> String {
        self.name.to_lowercase().replace(' ', "")
    }
}

/// True if any keyword of topic `index` occurs in `lowercase_text`.
pub(crate) fn keyword_present(index: usize, lowercase_text: &str) -> bool {
    KEYWORD_MATCHERS
        .get(index)
        .and_then(Option::as_ref)
        .is_some_and(|ac| ac.is_match(lowercase_text))
}
