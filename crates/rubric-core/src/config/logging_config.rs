//! Logging configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LOG_FILTER;

/// Configuration for the tracing subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUBRIC_LOG` is unset.
    pub filter: Option<String>,
}

impl LoggingConfig {
    /// Returns the effective filter, defaulting to `rubric=info`.
    pub fn effective_filter(&self) -> &str {
        self.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
