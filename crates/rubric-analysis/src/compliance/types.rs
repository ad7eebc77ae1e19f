//! Compliance result types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Present,
    Missing,
}

impl ComplianceStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Missing => "Missing",
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

impl std::fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome for one standard topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardsComplianceTopic {
    pub topic_name: String,
    pub topic_description: String,
    pub status: ComplianceStatus,
    pub content_summary: String,
    /// Empty when the topic is present.
    pub recommendations: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsComplianceResult {
    pub total_topics: usize,
    pub present_topics_count: usize,
    pub missing_topics_count: usize,
    /// `present / total * 100`.
    pub compliance_percentage: f64,
    /// All topics, in catalog order.
    pub topics: Vec<StandardsComplianceTopic>,
    /// First five missing topic names, in catalog order.
    pub priority_improvements: Vec<String>,
}
