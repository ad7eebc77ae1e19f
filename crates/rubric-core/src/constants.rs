//! Shared constants for the rubric analysis engine.

/// Rubric version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "rubric.toml";

/// User-level config directory name, relative to the home directory.
pub const USER_CONFIG_DIR: &str = ".rubric";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "RUBRIC_LOG";

/// Fallback tracing filter when nothing else is configured.
pub const DEFAULT_LOG_FILTER: &str = "rubric=info";

/// Maximum document size accepted by ingestion (default: 1MB).
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 1_048_576;

/// File extensions accepted by ingestion when none are configured.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = ["md", "markdown", "txt", "adr"];

// ---- Rubric shape ----

/// Number of mandatory ADR sections.
pub const MANDATORY_SECTION_COUNT: usize = 5;

/// Number of optional ADR sections.
pub const OPTIONAL_SECTION_COUNT: usize = 5;

/// Number of topics in the compliance standard.
pub const COMPLIANCE_TOPIC_COUNT: usize = 24;

/// Number of missing topics reported as priority improvements.
pub const PRIORITY_IMPROVEMENT_LIMIT: usize = 5;
