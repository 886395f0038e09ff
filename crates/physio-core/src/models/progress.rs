use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::comparison::ChangeDirection;
use super::measure_type::MeasureType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Trend {
    Improved,
    Declined,
    Stable,
    InsufficientData,
}

impl From<ChangeDirection> for Trend {
    fn from(direction: ChangeDirection) -> Self {
        match direction {
            ChangeDirection::Improved => Trend::Improved,
            ChangeDirection::Declined => Trend::Declined,
            ChangeDirection::Stable => Trend::Stable,
        }
    }
}

/// A single point of a patient's score history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressPoint {
    pub measured_at: jiff::Timestamp,
    pub score: f64,
}

/// Longitudinal progress for one patient on one measure type.
/// Computed on demand from the full history, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProgressResult {
    pub patient_id: Uuid,
    pub measure_type: MeasureType,
    pub current_score: f64,
    pub baseline_score: f64,
    pub previous_score: Option<f64>,
    pub change: f64,
    /// Progress from baseline toward the best attainable score, in percent.
    /// Not clamped: above 100 or below 0 is meaningful.
    pub change_percent: f64,
    pub mcid: Option<f64>,
    pub mcid_achieved: bool,
    pub trend: Trend,
    pub total_measurements: usize,
    pub points: Vec<ProgressPoint>,
}
