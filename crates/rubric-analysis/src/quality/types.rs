//! Quality assessment types.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The five quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityDimension {
    Completeness,
    Clarity,
    Traceability,
    Consistency,
    Justification,
}

impl QualityDimension {
    pub const ALL: &'static [QualityDimension] = &[
        Self::Completeness,
        Self::Clarity,
        Self::Traceability,
        Self::Consistency,
        Self::Justification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Completeness => "completeness",
            Self::Clarity => "clarity",
            Self::Traceability => "traceability",
            Self::Consistency => "consistency",
            Self::Justification => "justification",
        }
    }
}

impl std::fmt::Display for QualityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Sub-scores keyed by dimension, always in [`QualityDimension::ALL`] order.
///
/// Serializes as a JSON object whose keys follow that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualityDimensions(Vec<(QualityDimension, f64)>);

impl QualityDimensions {
    pub fn get(&self, dimension: QualityDimension) -> Option<f64> {
        self.0.iter().find(|(d, _)| *d == dimension).map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QualityDimension, f64)> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for QualityDimensions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (dimension, score) in &self.0 {
            map.serialize_entry(dimension.name(), score)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for QualityDimensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = BTreeMap::<String, f64>::deserialize(deserializer)?;
        Ok(Self(
            QualityDimension::ALL
                .iter()
                .filter_map(|d| raw.get(d.name()).map(|score| (*d, *score)))
                .collect(),
        ))
    }
}

/// Five sub-scores and their unweighted mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessmentResult {
    pub completeness_score: f64,
    pub clarity_score: f64,
    pub traceability_score: f64,
    pub consistency_score: f64,
    pub justification_score: f64,
    pub overall_quality_score: f64,
    /// Same five sub-scores keyed by dimension name.
    pub quality_dimensions: QualityDimensions,
}

impl QualityAssessmentResult {
    /// Build a result from the five sub-scores, deriving the mean and the
    /// name-keyed view.
    pub fn from_scores(
        completeness: f64,
        clarity: f64,
        traceability: f64,
        consistency: f64,
        justification: f64,
    ) -> Self {
        let overall = (completeness + clarity + traceability + consistency + justification) / 5.0;
        let mut result = Self {
            completeness_score: completeness,
            clarity_score: clarity,
            traceability_score: traceability,
            consistency_score: consistency,
            justification_score: justification,
            overall_quality_score: overall,
            quality_dimensions: QualityDimensions::default(),
        };
        result.quality_dimensions =
            QualityDimensions(QualityDimension::ALL.iter().map(|d| (*d, result.score(*d))).collect());
        result
    }

    pub fn score(&self, dimension: QualityDimension) -> f64 {
        match dimension {
            QualityDimension::Completeness => self.completeness_score,
            QualityDimension::Clarity => self.clarity_score,
            QualityDimension::Traceability => self.traceability_score,
            QualityDimension::Consistency => self.consistency_score,
            QualityDimension::Justification => self.justification_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_keep_declared_order() {
        let q = QualityAssessmentResult::from_scores(10.0, 20.0, 30.0, 40.0, 50.0);
        let order: Vec<_> = q.quality_dimensions.iter().map(|(d, _)| d).collect();
        assert_eq!(order, QualityDimension::ALL.to_vec());

        let json = serde_json::to_string(&q.quality_dimensions).expect("serializes");
        assert_eq!(
            json,
            r#"{"completeness":10.0,"clarity":20.0,"traceability":30.0,"consistency":40.0,"justification":50.0}"#
        );
    }

    #[test]
    fn test_dimensions_reorder_on_deserialize() {
        let json = r#"{"justification":5.0,"clarity":2.0,"completeness":1.0}"#;
        let dims: QualityDimensions = serde_json::from_str(json).expect("deserializes");
        let order: Vec<_> = dims.iter().map(|(d, _)| d).collect();
        assert_eq!(
            order,
            vec![
                QualityDimension::Completeness,
                QualityDimension::Clarity,
                QualityDimension::Justification
            ]
        );
        assert_eq!(dims.get(QualityDimension::Traceability), None);
    }
}
