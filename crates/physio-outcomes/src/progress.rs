use physio_core::models::definition::MeasureDefinition;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::Measurement;
use physio_core::models::progress::{ProgressPoint, ProgressResult, Trend};
use tracing::debug;
use uuid::Uuid;

use crate::change::{self, PERCENT_EPSILON};
use crate::error::OutcomesError;

/// Progress from baseline toward `target`, in percent.
///
/// Zero when the baseline already sits on the target. Not clamped.
pub fn change_percent(baseline: f64, current: f64, target: f64) -> f64 {
    let denominator = target - baseline;
    if denominator.abs() < PERCENT_EPSILON {
        return 0.0;
    }
    change::change(current, baseline) / denominator * 100.0
}

pub fn trend(change: f64, higher_is_better: bool, total_measurements: usize) -> Trend {
    if total_measurements < 2 {
        return Trend::InsufficientData;
    }
    change::direction(change, higher_is_better).into()
}

/// Derive progress for one patient and measure type.
///
/// `history` must be the complete history for the pair, ordered by
/// `measured_at` ascending. The first entry is the baseline.
pub fn calculate_progress(
    patient_id: Uuid,
    measure_type: MeasureType,
    definition: &MeasureDefinition,
    history: &[Measurement],
) -> Result<ProgressResult, OutcomesError> {
    let (Some(first), Some(last)) = (history.first(), history.last()) else {
        return Err(OutcomesError::EmptyHistory {
            patient_id,
            measure_type,
        });
    };

    let baseline = first.score;
    let current = last.score;
    let previous = history.len().checked_sub(2).map(|i| history[i].score);

    let change = change::change(current, baseline);
    let change_percent = change_percent(baseline, current, definition.target_score());
    let mcid_achieved = definition.mcid.is_some_and(|mcid| {
        change::directional_mcid_achieved(change, mcid, definition.higher_is_better)
    });
    let trend = trend(change, definition.higher_is_better, history.len());

    debug!(
        patient_id = %patient_id,
        measure_type = %measure_type,
        baseline,
        current,
        change,
        change_percent,
        ?trend,
        "progress calculated"
    );

    Ok(ProgressResult {
        patient_id,
        measure_type,
        current_score: current,
        baseline_score: baseline,
        previous_score: previous,
        change,
        change_percent,
        mcid: definition.mcid,
        mcid_achieved,
        trend,
        total_measurements: history.len(),
        points: history
            .iter()
            .map(|m| ProgressPoint {
                measured_at: m.measured_at,
                score: m.score,
            })
            .collect(),
    })
}
