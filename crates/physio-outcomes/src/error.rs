use physio_core::models::localized::LocalizedText;
use physio_core::models::measure_type::MeasureType;
use thiserror::Error;
use uuid::Uuid;

use crate::scoring::ValidationError;

#[derive(Debug, Error)]
pub enum OutcomesError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error(
        "re-assessment too soon: last {measure_type} recorded at {last_measured_at}, \
         next allowed from {next_allowed_at}"
    )]
    ReassessmentTooSoon {
        measure_type: MeasureType,
        last_measured_at: jiff::Timestamp,
        next_allowed_at: jiff::Timestamp,
    },

    #[error("no {measure_type} measurements recorded for patient {patient_id}")]
    EmptyHistory {
        patient_id: Uuid,
        measure_type: MeasureType,
    },
}

impl OutcomesError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            OutcomesError::Validation(e) => e.code.as_str(),
            OutcomesError::ReassessmentTooSoon { .. } => "reassessment_too_soon",
            OutcomesError::EmptyHistory { .. } => "empty_history",
        }
    }

    /// Human-readable message in both supported languages.
    pub fn message(&self) -> LocalizedText {
        match self {
            OutcomesError::Validation(e) => e.message.clone(),
            OutcomesError::ReassessmentTooSoon {
                measure_type,
                last_measured_at,
                next_allowed_at,
            } => LocalizedText::new(
                self.to_string(),
                format!(
                    "reavaliação muito cedo: último {measure_type} registrado em \
                     {last_measured_at}, próxima permitida a partir de {next_allowed_at}"
                ),
            ),
            OutcomesError::EmptyHistory {
                patient_id,
                measure_type,
            } => LocalizedText::new(
                self.to_string(),
                format!("nenhuma medição {measure_type} registrada para o paciente {patient_id}"),
            ),
        }
    }
}
