//! Phases 4-6: improvement suggestions, enterprise architecture guidance,
//! and design pattern recommendations.

pub mod design;
pub mod enterprise;
pub mod improvements;
pub mod types;

pub use design::design_patterns;
pub use enterprise::enterprise_suggestions;
pub use improvements::suggest_improvements;
pub use types::{
    DesignPattern, EnterpriseArchitectureSuggestion, EnterpriseCategory, ImprovementCategory,
    ImprovementSuggestion, PatternCategory,
};
