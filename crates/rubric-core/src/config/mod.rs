//! Configuration system for rubric.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.
//!
//! Scoring thresholds are fixed and have no configuration keys.

pub mod ingest_config;
pub mod logging_config;
pub mod report_config;
pub mod rubric_config;

pub use ingest_config::IngestConfig;
pub use logging_config::LoggingConfig;
pub use report_config::ReportConfig;
pub use rubric_config::{ConfigOverrides, RubricConfig};
