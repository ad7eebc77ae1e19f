//! Phase 9: compliance against the 24-topic ADR standard.

pub mod catalog;
pub mod checker;
pub mod types;

pub use catalog::{StandardTopic, STANDARD_TOPICS};
pub use checker::check_compliance;
pub use types::{ComplianceStatus, StandardsComplianceResult, StandardsComplianceTopic};
