//! Top-level rubric configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{IngestConfig, LoggingConfig, ReportConfig};
use crate::constants::{PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`RUBRIC_*`)
/// 3. Project config (`rubric.toml` in project root)
/// 4. User config (`~/.rubric/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RubricConfig {
    pub ingest: IngestConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

/// Override values supplied by an embedding host (CLI flags, request
/// parameters). Highest priority layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub max_document_bytes: Option<u64>,
    pub pretty: Option<bool>,
    pub log_filter: Option<String>,
}

impl RubricConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(ConfigError::ParseError { .. }) => {
                        return Err(ConfigError::ParseError {
                            path: user_config_path.display().to_string(),
                            message: "invalid TOML in user config".to_string(),
                        });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        tracing::debug!(root = %root.display(), "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &RubricConfig) -> Result<(), ConfigError> {
        if config.ingest.max_document_bytes == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "ingest.max_document_bytes".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for ext in &config.ingest.allowed_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ConfigError::InvalidValue {
                    field: "ingest.allowed_extensions".to_string(),
                    message: format!("'{}' must be a bare extension like \"md\"", ext),
                });
            }
        }
        if let Some(filter) = &config.logging.filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "logging.filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.rubric/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut RubricConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: RubricConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut RubricConfig, other: &RubricConfig) {
        if other.ingest.max_document_bytes.is_some() {
            base.ingest.max_document_bytes = other.ingest.max_document_bytes;
        }
        if !other.ingest.allowed_extensions.is_empty() {
            base.ingest.allowed_extensions = other.ingest.allowed_extensions.clone();
        }
        if other.report.pretty.is_some() {
            base.report.pretty = other.report.pretty;
        }
        if other.logging.filter.is_some() {
            base.logging.filter = other.logging.filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `RUBRIC_INGEST_MAX_DOCUMENT_BYTES`, `RUBRIC_REPORT_PRETTY`, etc.
    fn apply_env_overrides(config: &mut RubricConfig) {
        if let Ok(val) = std::env::var("RUBRIC_INGEST_MAX_DOCUMENT_BYTES") {
            if let Ok(v) = val.parse::<u64>() {
                config.ingest.max_document_bytes = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RUBRIC_REPORT_PRETTY") {
            if let Ok(v) = val.parse::<bool>() {
                config.report.pretty = Some(v);
            }
        }
        if let Ok(val) = std::env::var("RUBRIC_LOG_FILTER") {
            config.logging.filter = Some(val);
        }
    }

    fn apply_overrides(config: &mut RubricConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.max_document_bytes {
            config.ingest.max_document_bytes = Some(v);
        }
        if let Some(v) = overrides.pretty {
            config.report.pretty = Some(v);
        }
        if let Some(ref v) = overrides.log_filter {
            config.logging.filter = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
