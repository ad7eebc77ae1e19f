//! Report rendering configuration.

use serde::{Deserialize, Serialize};

/// Configuration for rendering analysis reports.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Pretty-print JSON output. Default: false.
    pub pretty: Option<bool>,
}

impl ReportConfig {
    pub fn effective_pretty(&self) -> bool {
        self.pretty.unwrap_or(false)
    }
}
