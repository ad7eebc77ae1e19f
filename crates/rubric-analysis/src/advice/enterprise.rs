//! Phase 5: enterprise architecture guidance.
//!
//! A fixed catalog, identical for every document.

use std::sync::LazyLock;

use rubric_core::types::Priority;

use super::types::{EnterpriseArchitectureSuggestion, EnterpriseCategory};

struct CatalogEntry {
    category: EnterpriseCategory,
    priority: Priority,
    description: &'static str,
    rationale: &'static str,
    implementation_guidance: &'static str,
    impact_assessment: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        category: EnterpriseCategory::StrategicAlignment,
        priority: Priority::High,
        description: "Align decision with business goals",
        rationale: "Architecture decisions should directly support strategic objectives",
        implementation_guidance: "Map decision to 2-3 key business drivers and quantify business value",
        impact_assessment: "Enables better portfolio management and resource allocation",
    },
    CatalogEntry {
        category: EnterpriseCategory::Governance,
        priority: Priority::High,
        description: "Establish governance and approval routing",
        rationale: "Clear governance ensures consistency and accountability",
        implementation_guidance: "Define approval body, review criteria, and escalation paths",
        impact_assessment: "Reduces rework and ensures compliance",
    },
    CatalogEntry {
        category: EnterpriseCategory::Integration,
        priority: Priority::Medium,
        description: "Plan integration with existing systems",
        rationale: "Integration considerations prevent silos and data fragmentation",
        implementation_guidance: "Document integration patterns, data flows, and API contracts",
        impact_assessment: "Reduces integration costs and time-to-value",
    },
    CatalogEntry {
        category: EnterpriseCategory::Security,
        priority: Priority::High,
        description: "Address security implications",
        rationale: "Security must be architected in, not added after",
        implementation_guidance: "Conduct threat modeling and document security controls",
        impact_assessment: "Prevents costly security fixes and compliance issues",
    },
    CatalogEntry {
        category: EnterpriseCategory::Scalability,
        priority: Priority::Medium,
        description: "Plan for scalability and growth",
        rationale: "Architecture should support future growth without major rework",
        implementation_guidance: "Define scaling strategy, capacity planning, and performance targets",
        impact_assessment: "Reduces need for rearchitecting as users grow",
    },
    CatalogEntry {
        category: EnterpriseCategory::DataManagement,
        priority: Priority::Medium,
        description: "Establish data management principles",
        rationale: "Consistent data management enables informed decision-making",
        implementation_guidance: "Define data ownership, quality standards, and governance",
        impact_assessment: "Improves data quality and accessibility",
    },
];

static SUGGESTIONS: LazyLock<Vec<EnterpriseArchitectureSuggestion>> = LazyLock::new(|| {
    CATALOG
        .iter()
        .map(|e| EnterpriseArchitectureSuggestion {
            category: e.category,
            priority: e.priority,
            description: e.description.to_string(),
            rationale: e.rationale.to_string(),
            implementation_guidance: e.implementation_guidance.to_string(),
            impact_assessment: e.impact_assessment.to_string(),
        })
        .collect()
});

/// The six enterprise suggestions in catalog order.
pub fn enterprise_suggestions() -> Vec<EnterpriseArchitectureSuggestion> {
    SUGGESTIONS.clone()
}
