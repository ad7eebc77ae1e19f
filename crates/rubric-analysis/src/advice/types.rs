//! Advice types shared by phases 4-6.

use rubric_core::types::Priority;
use serde::{Deserialize, Serialize};

/// Area an improvement suggestion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImprovementCategory {
    Structure,
    #[serde(rename = "Missing Content")]
    MissingContent,
    Clarity,
    Justification,
    Traceability,
}

impl ImprovementCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Structure => "Structure",
            Self::MissingContent => "Missing Content",
            Self::Clarity => "Clarity",
            Self::Justification => "Justification",
            Self::Traceability => "Traceability",
        }
    }
}

impl std::fmt::Display for ImprovementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single actionable suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovementSuggestion {
    pub priority: Priority,
    pub category: ImprovementCategory,
    pub description: String,
    pub specific_example: String,
    pub implementation_guidance: String,
}

/// Enterprise architecture concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnterpriseCategory {
    #[serde(rename = "Strategic Alignment")]
    StrategicAlignment,
    Governance,
    Integration,
    Security,
    Scalability,
    #[serde(rename = "Data Management")]
    DataManagement,
}

impl EnterpriseCategory {
    pub const ALL: &'static [EnterpriseCategory] = &[
        Self::StrategicAlignment,
        Self::Governance,
        Self::Integration,
        Self::Security,
        Self::Scalability,
        Self::DataManagement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::StrategicAlignment => "Strategic Alignment",
            Self::Governance => "Governance",
            Self::Integration => "Integration",
            Self::Security => "Security",
            Self::Scalability => "Scalability",
            Self::DataManagement => "Data Management",
        }
    }
}

impl std::fmt::Display for EnterpriseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseArchitectureSuggestion {
    pub category: EnterpriseCategory,
    pub priority: Priority,
    pub description: String,
    pub rationale: String,
    pub implementation_guidance: String,
    pub impact_assessment: String,
}

/// Family a design pattern belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternCategory {
    Architectural,
    Integration,
    Data,
    Resilience,
    Security,
    Scalability,
}

impl PatternCategory {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Architectural => "Architectural",
            Self::Integration => "Integration",
            Self::Data => "Data",
            Self::Resilience => "Resilience",
            Self::Security => "Security",
            Self::Scalability => "Scalability",
        }
    }
}

impl std::fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignPattern {
    pub name: String,
    pub category: PatternCategory,
    pub applicability: String,
    pub benefits: Vec<String>,
    pub considerations: Vec<String>,
    pub implementation_hints: String,
}
