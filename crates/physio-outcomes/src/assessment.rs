use physio_core::models::definition::MeasureDefinition;
use physio_core::models::measurement::{Interpretation, MeasurementResponse};

use crate::interpretation::interpret_score;
use crate::scoring::{ValidationError, calculate_score, score_percentage};
use crate::validation::validate_score_range;

/// The derived fields of a measurement, always computed together.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredResponses {
    pub score: f64,
    pub percentage: Option<f64>,
    pub interpretation: Option<Interpretation>,
}

/// Score responses, reject out-of-range results, and attach the percentage
/// and severity interpretation.
pub fn score_responses(
    responses: &[MeasurementResponse],
    definition: &MeasureDefinition,
) -> Result<ScoredResponses, ValidationError> {
    let score = calculate_score(responses, definition);
    validate_score_range(score, definition)?;

    Ok(ScoredResponses {
        score,
        percentage: score_percentage(score, definition),
        interpretation: interpret_score(score, definition),
    })
}
