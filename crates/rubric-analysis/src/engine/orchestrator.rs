//! Runs the nine phases over one document.

use rayon::prelude::*;
use tracing::{debug, debug_span};

use crate::advice::{design_patterns, enterprise_suggestions, suggest_improvements};
use crate::authorship::detect_authorship;
use crate::compliance::check_compliance;
use crate::debt::analyze_debt;
use crate::document::{Document, SectionMap};
use crate::maturity::score_maturity;
use crate::quality::assess_quality;
use crate::structure::analyze_structure;

use super::report::Report;

/// A document with its sections extracted once, ready to analyze.
///
/// Every phase is a pure function of the document and the results of
/// earlier phases, so repeated runs produce identical reports.
#[derive(Debug, Clone)]
pub struct AdrAnalyzer {
    document: Document,
    sections: SectionMap,
}

impl AdrAnalyzer {
    pub fn new(text: impl Into<String>) -> Self {
        let document = Document::new(text);
        let sections = SectionMap::extract(&document);
        Self { document, sections }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn sections(&self) -> &SectionMap {
        &self.sections
    }

    /// Run all nine phases.
    pub fn run(&self) -> Report {
        let span = debug_span!("analyze", bytes = self.document.len(), sections = self.sections.len());
        let _guard = span.enter();

        // Phase 1: Structure.
        let structure = analyze_structure(&self.sections);
        debug!(
            score = structure.structure_quality_score,
            mandatory = structure.mandatory_sections_count,
            "Phase 1: structure analyzed"
        );

        // Phase 2: Quality.
        let quality = assess_quality(&self.document, &self.sections);
        debug!(overall = quality.overall_quality_score, "Phase 2: quality assessed");

        // Phase 3: Authorship.
        let authorship = detect_authorship(&self.document);
        debug!(
            confidence = authorship.confidence,
            indicators = authorship.ai_indicators.len(),
            "Phase 3: authorship signals collected"
        );

        // Phases 4-6: Advice.
        let improvements = suggest_improvements(&self.sections, &structure, &quality);
        let enterprise = enterprise_suggestions();
        let patterns = design_patterns();
        debug!(improvements = improvements.len(), "Phases 4-6: advice generated");

        // Phase 7: Debt.
        let technical_debt = analyze_debt(&self.sections, &quality, &authorship);
        debug!(items = technical_debt.len(), "Phase 7: technical debt derived");

        // Phase 8: Maturity.
        let maturity = score_maturity(&self.document, &quality);
        debug!(
            score = maturity.overall_maturity_score,
            level = %maturity.maturity_level,
            "Phase 8: maturity scored"
        );

        // Phase 9: Compliance.
        let compliance = check_compliance(&self.document, &self.sections);
        debug!(
            present = compliance.present_topics_count,
            percentage = compliance.compliance_percentage,
            "Phase 9: compliance checked"
        );

        Report {
            overall_quality_score: quality.overall_quality_score,
            overall_maturity_score: maturity.overall_maturity_score,
            compliance_percentage: compliance.compliance_percentage,
            structure,
            quality,
            authorship,
            improvements,
            enterprise,
            design_patterns: patterns,
            technical_debt,
            maturity,
            compliance,
        }
    }
}

/// Analyze a single document.
pub fn analyze(text: &str) -> Report {
    AdrAnalyzer::new(text).run()
}

/// Analyze independent documents in parallel. Output order matches input.
pub fn analyze_batch<S: AsRef<str> + Sync>(texts: &[S]) -> Vec<Report> {
    texts.par_iter().map(|t| analyze(t.as_ref())).collect()
}
