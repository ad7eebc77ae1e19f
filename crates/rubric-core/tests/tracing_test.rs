//! Tests for the rubric tracing setup.
//!
//! Filter resolution is tested through `resolve_filter`. The `init_*` tests
//! are smoke tests: the `Once` installs a subscriber on the first call only.

use std::sync::Mutex;

use rubric_core::tracing::{init_tracing, init_tracing_with, resolve_filter};
use tracing::level_filters::LevelFilter;

/// Global mutex to serialize tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_env_value_takes_precedence() {
    let filter = resolve_filter(Some("debug"), "rubric=warn");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
}

#[test]
fn test_missing_env_uses_fallback() {
    let filter = resolve_filter(None, "rubric_analysis=trace");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
}

#[test]
fn test_invalid_env_uses_fallback() {
    let filter = resolve_filter(Some("rubric=notalevel"), "rubric=warn");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
}

#[test]
fn test_invalid_fallback_uses_default() {
    let filter = resolve_filter(None, "rubric=notalevel");
    assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
}

#[test]
fn test_rubric_log_debug() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    std::env::set_var("RUBRIC_LOG", "debug");
    init_tracing();
    std::env::remove_var("RUBRIC_LOG");
}

#[test]
fn test_init_tracing_idempotent() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    init_tracing();
    init_tracing();
    init_tracing_with("rubric_analysis=trace");
}
