//! Maturity types.

use serde::{Deserialize, Serialize};

/// Five-band maturity scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Initial,
    Developing,
    Defined,
    Managed,
    Optimizing,
}

impl MaturityLevel {
    pub const ALL: &'static [MaturityLevel] = &[
        Self::Initial,
        Self::Developing,
        Self::Defined,
        Self::Managed,
        Self::Optimizing,
    ];

    /// Band for an overall score. Lower bounds are inclusive: 40.0 is
    /// `Defined`, 39.99 is `Developing`.
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            Self::Initial
        } else if score < 40.0 {
            Self::Developing
        } else if score < 60.0 {
            Self::Defined
        } else if score < 80.0 {
            Self::Managed
        } else {
            Self::Optimizing
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimizing => "Optimizing",
        }
    }
}

impl std::fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Four maturity dimensions, their mean, the band, and what to improve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchitectureMaturityResult {
    pub overall_maturity_score: f64,
    pub maturity_level: MaturityLevel,
    pub documentation_quality: f64,
    pub decision_rationale: f64,
    pub risk_assessment: f64,
    pub alternative_analysis: f64,
    pub improvement_pathway: Vec<String>,
}
