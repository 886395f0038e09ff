use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::localized::LocalizedText;
use super::measure_type::MeasureType;

/// One answered item of an outcome-measure questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasurementResponse {
    pub question_id: String,
    pub value: f64,
}

/// Severity band derived from the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Interpretation {
    pub severity: Severity,
    pub label: LocalizedText,
}

/// A recorded outcome measurement for one patient.
///
/// `score`, `percentage` and `interpretation` are derived from `responses`
/// and the definition; they are recomputed together on every edit.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Measurement {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub clinician_id: Uuid,
    pub definition_id: Uuid,
    pub measure_type: MeasureType,
    pub score: f64,
    pub percentage: Option<f64>,
    pub interpretation: Option<Interpretation>,
    pub responses: Vec<MeasurementResponse>,
    pub notes: Option<String>,
    pub body_region: Option<String>,
    pub measured_at: jiff::Timestamp,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// A clinician's submission of a new measurement.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecordMeasurementRequest {
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub clinician_id: Uuid,
    pub definition_id: Uuid,
    pub responses: Vec<MeasurementResponse>,
    #[serde(default)]
    pub notes: Option<String>,
    /// The patient's treated body region, checked against the measure's
    /// applicable regions.
    #[serde(default)]
    pub body_region: Option<String>,
    /// RFC 3339 instant. Defaults to the current time when absent.
    #[serde(default)]
    pub measured_at: Option<String>,
}

/// A correction to an existing measurement. Derived fields are recomputed
/// from the new responses.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UpdateMeasurementRequest {
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub responses: Vec<MeasurementResponse>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub body_region: Option<String>,
    /// Replaces `measured_at` when present.
    #[serde(default)]
    pub measured_at: Option<String>,
}
