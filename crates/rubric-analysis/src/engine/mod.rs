//! Nine-phase orchestration and the assembled report.
//!
//! Phase 1: Structure → Phase 2: Quality → Phase 3: Authorship →
//! Phase 4: Improvements → Phase 5: Enterprise → Phase 6: Patterns →
//! Phase 7: Debt → Phase 8: Maturity → Phase 9: Compliance

pub mod orchestrator;
pub mod report;

pub use orchestrator::{analyze, analyze_batch, AdrAnalyzer};
pub use report::{Report, ReportSummary, PHASE_NAMES};
