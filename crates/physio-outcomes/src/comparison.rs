//! Re-evaluation comparison.
//!
//! Applies the change and direction rules directly to caller-supplied value
//! pairs, so range-of-motion degrees, muscle grades and questionnaire scores
//! can be compared in one batch without a measure library. MCID here is
//! magnitude-based: a change of the threshold size in either direction counts.

use jiff::Timestamp;
use physio_core::models::comparison::{
    ChangeDirection, ComparisonBatch, ComparisonItem, ComparisonItemRequest, ComparisonSummary,
    ReevaluationRequest,
};
use physio_core::models::localized::LocalizedText;
use tracing::info;
use uuid::Uuid;

use crate::change;
use crate::error::OutcomesError;
use crate::scoring::{ValidationCode, ValidationError};
use crate::validation::parse_timestamp;

/// Values and threshold must be finite numbers.
fn check_finite(item: &ComparisonItemRequest) -> Result<(), ValidationError> {
    let values = [
        Some(item.current_value),
        Some(item.baseline_value),
        item.mcid_threshold,
    ];
    if let Some(value) = values.into_iter().flatten().find(|v| !v.is_finite()) {
        let label = &item.label;
        return Err(ValidationError {
            value: Some(value),
            ..ValidationError::new(
                ValidationCode::NonFiniteValue,
                LocalizedText::new(
                    format!("{label}: value {value} is not a finite number"),
                    format!("{label}: valor {value} não é um número finito"),
                ),
            )
        });
    }
    Ok(())
}

pub fn compare_item(request: &ComparisonItemRequest) -> ComparisonItem {
    let change = change::change(request.current_value, request.baseline_value);
    let change_percent = if request.baseline_value != 0.0 {
        Some(change / request.baseline_value * 100.0)
    } else {
        None
    };
    let mcid_achieved = request
        .mcid_threshold
        .is_some_and(|threshold| change::magnitude_mcid_achieved(change, threshold));

    ComparisonItem {
        domain: request.domain,
        label: request.label.clone(),
        current_value: request.current_value,
        baseline_value: request.baseline_value,
        higher_is_better: request.higher_is_better,
        mcid_threshold: request.mcid_threshold,
        change,
        change_percent,
        interpretation: change::direction(change, request.higher_is_better),
        mcid_achieved,
    }
}

pub fn summarize(items: &[ComparisonItem]) -> ComparisonSummary {
    items.iter().fold(
        ComparisonSummary {
            total_items: items.len(),
            ..ComparisonSummary::default()
        },
        |mut summary, item| {
            match item.interpretation {
                ChangeDirection::Improved => summary.improved += 1,
                ChangeDirection::Declined => summary.declined += 1,
                ChangeDirection::Stable => summary.stable += 1,
            }
            if item.mcid_achieved {
                summary.mcid_achieved += 1;
            }
            summary
        },
    )
}

/// Compare every item of a re-evaluation and build the batch to persist.
///
/// `now` is used for `created_at`, and for `assessed_at` when the request
/// does not carry one. Fails before any computation on an empty item list,
/// a non-finite value, or an unparseable timestamp.
pub fn compare(
    request: &ReevaluationRequest,
    now: Timestamp,
) -> Result<ComparisonBatch, OutcomesError> {
    if request.items.is_empty() {
        return Err(ValidationError::new(
            ValidationCode::EmptyComparison,
            LocalizedText::new(
                "re-evaluation requires at least one item",
                "a reavaliação requer pelo menos um item",
            ),
        )
        .into());
    }

    for item in &request.items {
        check_finite(item)?;
    }

    let assessed_at = match request.assessed_at.as_deref() {
        Some(text) => parse_timestamp(text)?,
        None => now,
    };

    let items: Vec<ComparisonItem> = request.items.iter().map(compare_item).collect();
    let summary = summarize(&items);

    let batch = ComparisonBatch {
        id: Uuid::new_v4(),
        patient_id: request.patient_id,
        clinic_id: request.clinic_id,
        clinician_id: request.clinician_id,
        assessed_at,
        notes: request.notes.clone(),
        items,
        summary,
        created_at: now,
    };

    info!(
        batch_id = %batch.id,
        patient_id = %batch.patient_id,
        total = summary.total_items,
        improved = summary.improved,
        declined = summary.declined,
        stable = summary.stable,
        mcid_achieved = summary.mcid_achieved,
        "re-evaluation compared"
    );

    Ok(batch)
}
