//! File-level analysis record.

use std::path::Path;

use rubric_core::config::{ReportConfig, RubricConfig};
use rubric_core::errors::{IngestError, ReportError};
use serde::{Deserialize, Serialize};

use crate::engine::{analyze, Report, ReportSummary};

use super::loader::{load_document, DocumentKind};

/// A report together with what was analyzed. Nothing is persisted here;
/// this is the shape handed to storage by the embedding host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub document_kind: DocumentKind,
    pub file_name: String,
    pub summary: ReportSummary,
    pub report: Report,
}

impl AnalysisRecord {
    pub fn to_json(&self, config: &ReportConfig) -> Result<String, ReportError> {
        let rendered = if config.effective_pretty() {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| ReportError::Serialization(e.to_string()))
    }
}

/// Load and analyze a single file.
pub fn analyze_file(path: &Path, config: &RubricConfig) -> Result<AnalysisRecord, IngestError> {
    let loaded = load_document(path, &config.ingest)?;
    let report = analyze(&loaded.text);

    tracing::info!(
        file = %loaded.file_name,
        quality = report.overall_quality_score,
        maturity = report.overall_maturity_score,
        compliance = report.compliance_percentage,
        "document analyzed"
    );

    Ok(AnalysisRecord {
        document_kind: loaded.kind,
        file_name: loaded.file_name,
        summary: report.summary(),
        report,
    })
}
