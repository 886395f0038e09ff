use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Clinical domain of a re-evaluation item. A label only; it does not change
/// how the item is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComparisonDomain {
    RangeOfMotion,
    MuscleStrength,
    OutcomeMeasure,
    Other,
}

/// Direction of a change relative to what is clinically better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChangeDirection {
    Improved,
    Declined,
    Stable,
}

/// A value pair submitted for comparison.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonItemRequest {
    pub domain: ComparisonDomain,
    pub label: String,
    pub current_value: f64,
    pub baseline_value: f64,
    pub higher_is_better: bool,
    #[serde(default)]
    pub mcid_threshold: Option<f64>,
}

/// A re-evaluation submitted during a clinical visit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReevaluationRequest {
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub clinician_id: Uuid,
    /// RFC 3339 instant. Defaults to the current time when absent.
    #[serde(default)]
    pub assessed_at: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    pub items: Vec<ComparisonItemRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonItem {
    pub domain: ComparisonDomain,
    pub label: String,
    pub current_value: f64,
    pub baseline_value: f64,
    pub higher_is_better: bool,
    pub mcid_threshold: Option<f64>,
    pub change: f64,
    /// `None` when the baseline is zero.
    pub change_percent: Option<f64>,
    pub interpretation: ChangeDirection,
    pub mcid_achieved: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonSummary {
    pub total_items: usize,
    pub improved: usize,
    pub declined: usize,
    pub stable: usize,
    pub mcid_achieved: usize,
}

/// The outcome of one re-evaluation. Written as a single unit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ComparisonBatch {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub clinician_id: Uuid,
    pub assessed_at: jiff::Timestamp,
    pub notes: Option<String>,
    pub items: Vec<ComparisonItem>,
    pub summary: ComparisonSummary,
    pub created_at: jiff::Timestamp,
}
