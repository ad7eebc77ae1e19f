//! Phase 7: technical debt items implied by the earlier phases.

pub mod analyzer;
pub mod types;

pub use analyzer::analyze_debt;
pub use types::{DebtType, TechnicalDebtItem};
