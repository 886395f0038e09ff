use physio_core::models::definition::{MeasureDefinition, ScoringMethod};
use physio_core::models::localized::LocalizedText;
use physio_core::models::measurement::MeasurementResponse;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::change;

/// Inclusive score bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRange {
    pub min: f64,
    pub max: f64,
}

impl ScoreRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl From<&MeasureDefinition> for ScoreRange {
    fn from(definition: &MeasureDefinition) -> Self {
        Self::new(definition.min_score, definition.max_score)
    }
}

/// Machine-readable reason a value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationCode {
    ScoreOutOfRange,
    InvalidDefinition,
    InvalidTimestamp,
    EmptyComparison,
    NonFiniteValue,
}

impl ValidationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ValidationCode::ScoreOutOfRange => "score_out_of_range",
            ValidationCode::InvalidDefinition => "invalid_definition",
            ValidationCode::InvalidTimestamp => "invalid_timestamp",
            ValidationCode::EmptyComparison => "empty_comparison",
            ValidationCode::NonFiniteValue => "non_finite_value",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{}", .message.en)]
pub struct ValidationError {
    pub code: ValidationCode,
    pub message: LocalizedText,
    /// The offending value, for range errors.
    pub value: Option<f64>,
    pub expected_range: Option<ScoreRange>,
}

impl ValidationError {
    pub fn new(code: ValidationCode, message: LocalizedText) -> Self {
        Self {
            code,
            message,
            value: None,
            expected_range: None,
        }
    }

    pub fn out_of_range(label: &str, value: f64, range: ScoreRange) -> Self {
        Self {
            code: ValidationCode::ScoreOutOfRange,
            message: LocalizedText::new(
                format!(
                    "{label}: score {value} is outside range [{}, {}]",
                    range.min, range.max
                ),
                format!(
                    "{label}: pontuação {value} fora do intervalo [{}, {}]",
                    range.min, range.max
                ),
            ),
            value: Some(value),
            expected_range: Some(range),
        }
    }
}

/// Reduce item responses to a single score using the definition's method.
///
/// An empty response list scores `0.0` whatever the method.
pub fn calculate_score(responses: &[MeasurementResponse], definition: &MeasureDefinition) -> f64 {
    if responses.is_empty() {
        return 0.0;
    }

    let total: f64 = responses.iter().map(|r| r.value).sum();
    match definition.scoring_method() {
        ScoringMethod::Sum => total,
        ScoringMethod::Average => total / responses.len() as f64,
    }
}

/// Position of `score` within the definition's range, in percent.
/// `None` when the range is degenerate (`max == min`).
pub fn score_percentage(score: f64, definition: &MeasureDefinition) -> Option<f64> {
    change::normalized_percentage(score, definition.min_score, definition.max_score)
}
