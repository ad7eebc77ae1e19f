//! Technical debt types.

use rubric_core::types::{Effort, Priority};
use serde::{Deserialize, Serialize};

/// Kind of debt an ADR deficiency creates downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebtType {
    Code,
    Architectural,
    Design,
    Documentation,
    Test,
    Infrastructure,
    Knowledge,
}

impl DebtType {
    pub const ALL: &'static [DebtType] = &[
        Self::Code,
        Self::Architectural,
        Self::Design,
        Self::Documentation,
        Self::Test,
        Self::Infrastructure,
        Self::Knowledge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Code => "Code",
            Self::Architectural => "Architectural",
            Self::Design => "Design",
            Self::Documentation => "Documentation",
            Self::Test => "Test",
            Self::Infrastructure => "Infrastructure",
            Self::Knowledge => "Knowledge",
        }
    }
}

impl std::fmt::Display for DebtType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechnicalDebtItem {
    #[serde(rename = "type")]
    pub debt_type: DebtType,
    pub severity: Priority,
    pub description: String,
    pub impact: String,
    pub remediation_strategy: String,
    pub estimated_effort: Effort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_type_serializes_as_name() {
        assert_eq!(DebtType::ALL.len(), 7);
        for debt_type in DebtType::ALL {
            let json = serde_json::to_string(debt_type).expect("serializes");
            assert_eq!(json, format!("\"{}\"", debt_type.name()));
            assert_eq!(debt_type.to_string(), debt_type.name());
        }
    }
}
