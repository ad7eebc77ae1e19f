//! Tests for the rubric configuration system.

use std::sync::Mutex;

use rubric_core::config::{ConfigOverrides, RubricConfig};
use rubric_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all RUBRIC_ env vars and point HOME at an empty directory so a
/// developer's own `~/.rubric/config.toml` cannot leak into assertions.
fn isolate_env(home: &std::path::Path) {
    for key in [
        "RUBRIC_INGEST_MAX_DOCUMENT_BYTES",
        "RUBRIC_REPORT_PRETTY",
        "RUBRIC_LOG_FILTER",
    ] {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", home);
    std::env::remove_var("USERPROFILE");
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(
        dir.path().join("rubric.toml"),
        r#"
[ingest]
max_document_bytes = 2_000_000

[report]
pretty = false

[logging]
filter = "rubric_analysis=debug"
"#,
    )
    .unwrap();

    std::env::set_var("RUBRIC_INGEST_MAX_DOCUMENT_BYTES", "5000000");

    let overrides = ConfigOverrides {
        pretty: Some(true),
        ..Default::default()
    };
    let config = RubricConfig::load(dir.path(), Some(&overrides)).unwrap();

    // Overrides beat project config
    assert_eq!(config.report.pretty, Some(true));
    // Env beats project config
    assert_eq!(config.ingest.max_document_bytes, Some(5_000_000));
    // Project config beats defaults
    assert_eq!(config.logging.effective_filter(), "rubric_analysis=debug");

    isolate_env(home.path());
}

#[test]
fn test_user_config_is_lowest_file_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let user_dir = home.path().join(".rubric");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[ingest]\nmax_document_bytes = 10\nallowed_extensions = [\"txt\"]\n",
    )
    .unwrap();

    let dir = tempdir();
    std::fs::write(dir.path().join("rubric.toml"), "[ingest]\nmax_document_bytes = 20\n").unwrap();

    let config = RubricConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.ingest.effective_max_document_bytes(), 20);
    assert_eq!(config.ingest.effective_allowed_extensions(), vec!["txt".to_string()]);
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    let config = RubricConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.ingest.effective_max_document_bytes(), 1_048_576);
    assert!(config.ingest.accepts_extension("md"));
    assert!(config.ingest.accepts_extension("TXT"));
    assert!(!config.ingest.accepts_extension("pdf"));
    assert!(!config.report.effective_pretty());
    assert_eq!(config.logging.effective_filter(), "rubric=info");
}

#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    let home = tempdir();
    isolate_env(home.path());

    let dir = tempdir();
    std::fs::write(dir.path().join("rubric.toml"), "this is not valid toml {{{{").unwrap();

    match RubricConfig::load(dir.path(), None) {
        Err(ConfigError::ParseError { .. }) => {}
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

#[test]
fn test_zero_document_limit_rejected() {
    let result = RubricConfig::from_toml("[ingest]\nmax_document_bytes = 0\n");
    match result {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "ingest.max_document_bytes");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

#[test]
fn test_dotted_extension_rejected() {
    let result = RubricConfig::from_toml("[ingest]\nallowed_extensions = [\".md\"]\n");
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_unknown_keys_ignored() {
    let config = RubricConfig::from_toml("[report]\npretty = true\nfuture_option = 3\n").unwrap();
    assert!(config.report.effective_pretty());
}

#[test]
fn test_toml_round_trip() {
    let config = RubricConfig::from_toml("[ingest]\nmax_document_bytes = 4096\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = RubricConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.ingest.max_document_bytes, Some(4096));
}
