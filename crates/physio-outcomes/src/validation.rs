//! Acceptance checks applied before a measurement is stored.
//!
//! Score range and re-assessment interval are hard rejections. Body-region
//! compatibility is advisory: a mismatch is logged and reported back, but
//! never blocks the write.

use jiff::{SignedDuration, Timestamp};
use physio_core::models::definition::MeasureDefinition;
use physio_core::models::localized::LocalizedText;
use physio_core::models::measurement::Measurement;
use tracing::warn;

use crate::error::OutcomesError;
use crate::reference_measure;
use crate::scoring::{ScoreRange, ValidationCode, ValidationError};

/// Minimum days between two measurements of the same type for one patient.
pub const REASSESSMENT_INTERVAL_DAYS: u32 = 14;

/// Check the definition's own invariants: `max >= min` and a positive MCID.
pub fn validate_definition(definition: &MeasureDefinition) -> Result<(), ValidationError> {
    if definition.max_score < definition.min_score {
        return Err(ValidationError::new(
            ValidationCode::InvalidDefinition,
            LocalizedText::new(
                format!(
                    "{}: maximum score {} is below minimum {}",
                    definition.name.en, definition.max_score, definition.min_score
                ),
                format!(
                    "{}: pontuação máxima {} abaixo da mínima {}",
                    definition.name.pt, definition.max_score, definition.min_score
                ),
            ),
        ));
    }

    if let Some(mcid) = definition.mcid
        && (!mcid.is_finite() || mcid <= 0.0)
    {
        return Err(ValidationError::new(
            ValidationCode::InvalidDefinition,
            LocalizedText::new(
                format!("{}: MCID {mcid} must be a positive number", definition.name.en),
                format!("{}: MCID {mcid} deve ser um número positivo", definition.name.pt),
            ),
        ));
    }

    Ok(())
}

/// The score must sit inside both the reference range for its measure type
/// and the definition's own bounds. Custom measures have no reference range.
pub fn validate_score_range(
    score: f64,
    definition: &MeasureDefinition,
) -> Result<(), ValidationError> {
    if let Some(reference) = reference_measure(definition.measure_type) {
        let range = reference.range();
        if !range.contains(score) {
            return Err(ValidationError::out_of_range(
                definition.measure_type.as_str(),
                score,
                range,
            ));
        }
    }

    let range = ScoreRange::from(definition);
    if !range.contains(score) {
        return Err(ValidationError::out_of_range(&definition.name.en, score, range));
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionCompatibility {
    Compatible,
    Mismatch {
        region: String,
        applicable: Vec<String>,
    },
}

impl RegionCompatibility {
    pub fn is_compatible(&self) -> bool {
        matches!(self, RegionCompatibility::Compatible)
    }
}

/// Advisory check that the patient's body region is one the measure applies
/// to. Matching is exact. Global measures and an empty region always pass.
pub fn check_body_region(
    definition: &MeasureDefinition,
    region: Option<&str>,
) -> RegionCompatibility {
    let (Some(applicable), Some(region)) = (definition.body_regions.as_ref(), region) else {
        return RegionCompatibility::Compatible;
    };
    if region.is_empty() || applicable.iter().any(|r| r == region) {
        return RegionCompatibility::Compatible;
    }

    warn!(
        measure_type = %definition.measure_type,
        definition_id = %definition.id,
        region,
        applicable = ?applicable,
        "measure applied outside its body regions"
    );
    RegionCompatibility::Mismatch {
        region: region.to_string(),
        applicable: applicable.clone(),
    }
}

/// A new measurement must come at least `interval_days` after the last one of
/// the same type. Exactly `interval_days` apart is accepted.
pub fn check_reassessment_interval(
    last: Option<&Measurement>,
    measured_at: Timestamp,
    interval_days: u32,
) -> Result<(), OutcomesError> {
    let Some(last) = last else {
        return Ok(());
    };

    let interval = SignedDuration::from_hours(i64::from(interval_days) * 24);
    let next_allowed_at = last
        .measured_at
        .checked_add(interval)
        .unwrap_or(Timestamp::MAX);

    if measured_at < next_allowed_at {
        return Err(OutcomesError::ReassessmentTooSoon {
            measure_type: last.measure_type,
            last_measured_at: last.measured_at,
            next_allowed_at,
        });
    }
    Ok(())
}

/// Parse a caller-supplied instant. Only full RFC 3339 date-times with an
/// offset are accepted; a bare date is rejected.
pub fn parse_timestamp(text: &str) -> Result<Timestamp, ValidationError> {
    text.trim().parse::<Timestamp>().map_err(|e| {
        ValidationError::new(
            ValidationCode::InvalidTimestamp,
            LocalizedText::new(
                format!("invalid timestamp '{text}': {e}"),
                format!("data/hora inválida '{text}': {e}"),
            ),
        )
    })
}
