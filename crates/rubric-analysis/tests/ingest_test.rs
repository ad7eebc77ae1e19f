//! Loading documents from disk and analyzing files.

use std::path::Path;

use rubric_analysis::ingest::{analyze_file, load_document, DocumentKind};
use rubric_core::config::{IngestConfig, ReportConfig, RubricConfig};
use rubric_core::errors::{IngestError, RubricErrorCode};
use tempfile::TempDir;

const ADR: &str = "# Title\nUse Postgres\n# Status\nAccepted\n# Decision\nWe use Postgres because it is proven.\n";

fn write(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn test_load_markdown() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "0001-use-postgres.md", ADR.as_bytes());

    let doc = load_document(&path, &IngestConfig::default()).unwrap();
    assert_eq!(doc.kind, DocumentKind::Markdown);
    assert_eq!(doc.file_name, "0001-use-postgres.md");
    assert_eq!(doc.text, ADR);
}

#[test]
fn test_load_text_kind() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "decision.TXT", ADR.as_bytes());
    let doc = load_document(&path, &IngestConfig::default()).unwrap();
    assert_eq!(doc.kind, DocumentKind::Text);
}

#[test]
fn test_missing_file() {
    let err = load_document(Path::new("/nonexistent/adr.md"), &IngestConfig::default()).unwrap_err();
    assert!(matches!(err, IngestError::NotFound { .. }));
    assert_eq!(err.error_code(), "INGEST_ERROR");
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "adr.pdf", b"%PDF-1.7");
    let err = load_document(&path, &IngestConfig::default()).unwrap_err();
    match &err {
        IngestError::UnsupportedExtension { extension, .. } => assert_eq!(extension, "pdf"),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");
}

#[test]
fn test_no_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "README", ADR.as_bytes());
    let err = load_document(&path, &IngestConfig::default()).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedExtension { .. }));
}

#[test]
fn test_custom_extension_list() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "adr.rst", ADR.as_bytes());
    let config = IngestConfig {
        allowed_extensions: vec!["rst".to_string()],
        ..Default::default()
    };
    assert!(load_document(&path, &config).is_ok());
    assert!(load_document(&path, &IngestConfig::default()).is_err());
}

#[test]
fn test_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "big.md", ADR.as_bytes());
    let config = IngestConfig {
        max_document_bytes: Some(10),
        ..Default::default()
    };
    let err = load_document(&path, &config).unwrap_err();
    match err {
        IngestError::TooLarge { size, limit, .. } => {
            assert_eq!(size, ADR.len() as u64);
            assert_eq!(limit, 10);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.md", &[0x23, 0x20, 0xff, 0xfe, 0x0a]);
    let err = load_document(&path, &IngestConfig::default()).unwrap_err();
    assert!(matches!(err, IngestError::InvalidUtf8 { .. }));
}

#[test]
fn test_empty_file_is_analyzable() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "empty.md", b"");
    let record = analyze_file(&path, &RubricConfig::default()).unwrap();
    assert_eq!(record.report.structure.structure_quality_score, 0.0);
    assert_eq!(record.summary.compliance_percentage, 0.0);
}

#[test]
fn test_analyze_file_record() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "0001.md", ADR.as_bytes());

    let record = analyze_file(&path, &RubricConfig::default()).unwrap();
    assert_eq!(record.document_kind, DocumentKind::Markdown);
    assert_eq!(record.file_name, "0001.md");
    assert_eq!(record.summary, record.report.summary());
    assert_eq!(record.report.structure.mandatory_sections_count, 3);
}

#[test]
fn test_record_json_respects_pretty() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "0001.md", ADR.as_bytes());
    let record = analyze_file(&path, &RubricConfig::default()).unwrap();

    let compact = record.to_json(&ReportConfig::default()).unwrap();
    assert!(!compact.contains('\n'));

    let pretty = record.to_json(&ReportConfig { pretty: Some(true) }).unwrap();
    assert!(pretty.contains('\n'));

    let value: serde_json::Value = serde_json::from_str(&compact).unwrap();
    assert_eq!(value["document_kind"], "markdown");
    assert!(value["report"]["phase_1_structural_analysis"].is_object());
    assert!(value["summary"]["overall_quality_score"].is_number());
}
