use physio_core::models::localized::LocalizedText;
use physio_outcomes::error::OutcomesError;
use physio_outcomes::scoring::ValidationError;
use physio_storage::error::StorageError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Outcomes(#[from] OutcomesError),

    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Uuid },

    #[error(
        "measurement {measurement_id} does not belong to patient {patient_id} at clinic {clinic_id}"
    )]
    Ownership {
        measurement_id: Uuid,
        patient_id: Uuid,
        clinic_id: Uuid,
    },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<ValidationError> for ServiceError {
    fn from(e: ValidationError) -> Self {
        ServiceError::Outcomes(e.into())
    }
}

impl ServiceError {
    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            _ if self.is_not_found() => "not_found",
            ServiceError::Outcomes(e) => e.code(),
            ServiceError::NotFound { .. } => "not_found",
            ServiceError::Ownership { .. } => "ownership_mismatch",
            ServiceError::Storage(_) => "storage_error",
        }
    }

    /// A missing definition or measurement, or no history to report progress
    /// on.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ServiceError::NotFound { .. }
                | ServiceError::Outcomes(OutcomesError::EmptyHistory { .. })
        )
    }

    /// Errors the caller can fix by changing the request.
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            ServiceError::Outcomes(OutcomesError::Validation(_))
                | ServiceError::Outcomes(OutcomesError::ReassessmentTooSoon { .. })
        )
    }

    /// Human-readable message in both supported languages.
    pub fn message(&self) -> LocalizedText {
        match self {
            ServiceError::Outcomes(e) => e.message(),
            ServiceError::NotFound { resource, id } => LocalizedText::new(
                self.to_string(),
                format!("{resource} não encontrado: {id}"),
            ),
            ServiceError::Ownership {
                measurement_id,
                patient_id,
                clinic_id,
            } => LocalizedText::new(
                self.to_string(),
                format!(
                    "a medição {measurement_id} não pertence ao paciente {patient_id} \
                     na clínica {clinic_id}"
                ),
            ),
            ServiceError::Storage(_) => {
                LocalizedText::new(self.to_string(), "erro de armazenamento".to_string())
            }
        }
    }
}
