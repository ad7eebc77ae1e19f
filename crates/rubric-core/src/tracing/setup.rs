//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Initialize the rubric tracing/logging system.
///
/// Reads the `RUBRIC_LOG` environment variable for per-module log levels.
/// Format: `RUBRIC_LOG=rubric_analysis=debug,rubric_core=warn`
///
/// Falls back to `rubric=info` if `RUBRIC_LOG` is not set or is invalid.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    init_tracing_with(DEFAULT_LOG_FILTER);
}

/// Like [`init_tracing`], but with a caller-supplied fallback filter
/// (typically `LoggingConfig::effective_filter()`).
///
/// `RUBRIC_LOG` still takes precedence. An invalid fallback degrades to
/// `rubric=info`.
pub fn init_tracing_with(fallback: &str) {
    INIT.call_once(|| {
        let env = std::env::var(LOG_ENV_VAR).ok();
        let filter = resolve_filter(env.as_deref(), fallback);

        // Another subscriber may already be installed by the host.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

/// Build the filter from a `RUBRIC_LOG` value and a fallback.
///
/// An absent or invalid env value uses `fallback`; an invalid fallback
/// uses `rubric=info`.
pub fn resolve_filter(env: Option<&str>, fallback: &str) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(fallback).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}
