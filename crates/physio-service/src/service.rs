use jiff::Timestamp;
use physio_core::models::comparison::{ComparisonBatch, ReevaluationRequest};
use physio_core::models::definition::MeasureDefinition;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::{
    Measurement, RecordMeasurementRequest, UpdateMeasurementRequest,
};
use physio_core::models::progress::ProgressResult;
use physio_outcomes::all_measures;
use physio_outcomes::assessment::score_responses;
use physio_outcomes::comparison::compare;
use physio_outcomes::error::OutcomesError;
use physio_outcomes::progress::calculate_progress;
use physio_outcomes::validation::{
    check_body_region, check_reassessment_interval, parse_timestamp, validate_definition,
};
use physio_storage::store::MeasurementStore;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::audit::AuditEvent;
use crate::config::ServiceConfig;
use crate::error::ServiceError;

pub struct OutcomesService<S> {
    store: S,
    config: ServiceConfig,
}

impl<S: MeasurementStore> OutcomesService<S> {
    pub fn new(store: S, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn definition(&self, id: Uuid) -> Result<MeasureDefinition, ServiceError> {
        let definition = self
            .store
            .get_definition(id)
            .await?
            .ok_or(ServiceError::NotFound {
                resource: "measure definition",
                id,
            })?;
        validate_definition(&definition)?;
        Ok(definition)
    }

    /// Load a measurement and check it belongs to the stated patient and clinic.
    async fn owned_measurement(
        &self,
        id: Uuid,
        patient_id: Uuid,
        clinic_id: Uuid,
    ) -> Result<Measurement, ServiceError> {
        let measurement = self
            .store
            .get_measurement(id)
            .await?
            .ok_or(ServiceError::NotFound {
                resource: "measurement",
                id,
            })?;

        if measurement.patient_id != patient_id || measurement.clinic_id != clinic_id {
            return Err(ServiceError::Ownership {
                measurement_id: id,
                patient_id,
                clinic_id,
            });
        }
        Ok(measurement)
    }

    /// Score, validate, interpret and store a new measurement.
    pub async fn record_measurement(
        &self,
        request: RecordMeasurementRequest,
    ) -> Result<Measurement, ServiceError> {
        let definition = self.definition(request.definition_id).await?;

        let now = Timestamp::now();
        let measured_at = match request.measured_at.as_deref() {
            Some(text) => parse_timestamp(text)?,
            None => now,
        };

        let scored = score_responses(&request.responses, &definition)?;
        check_body_region(&definition, request.body_region.as_deref());

        let last = self
            .store
            .get_last_measurement(request.patient_id, definition.measure_type)
            .await?;
        check_reassessment_interval(
            last.as_ref(),
            measured_at,
            self.config.reassessment_interval_days,
        )?;

        let measurement = Measurement {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            clinic_id: request.clinic_id,
            clinician_id: request.clinician_id,
            definition_id: definition.id,
            measure_type: definition.measure_type,
            score: scored.score,
            percentage: scored.percentage,
            interpretation: scored.interpretation,
            responses: request.responses,
            notes: request.notes,
            body_region: request.body_region,
            measured_at,
            created_at: now,
            updated_at: now,
        };
        self.store.put_measurement(&measurement).await?;

        info!(
            measurement_id = %measurement.id,
            patient_id = %measurement.patient_id,
            measure_type = %measurement.measure_type,
            score = measurement.score,
            "measurement recorded"
        );
        AuditEvent::new(
            "measurement.recorded",
            "measurement",
            measurement.id,
            measurement.patient_id,
            measurement.clinic_id,
        )
        .with_details(json!({
            "clinician_id": measurement.clinician_id,
            "measure_type": measurement.measure_type,
            "score": measurement.score,
        }))
        .emit();

        Ok(measurement)
    }

    /// Replace a measurement's responses and recompute every derived field.
    ///
    /// The re-assessment interval is only enforced when recording.
    pub async fn update_measurement(
        &self,
        id: Uuid,
        request: UpdateMeasurementRequest,
    ) -> Result<Measurement, ServiceError> {
        let existing = self
            .owned_measurement(id, request.patient_id, request.clinic_id)
            .await?;
        let definition = self.definition(existing.definition_id).await?;

        let measured_at = match request.measured_at.as_deref() {
            Some(text) => parse_timestamp(text)?,
            None => existing.measured_at,
        };

        let scored = score_responses(&request.responses, &definition)?;
        check_body_region(&definition, request.body_region.as_deref());

        let measurement = Measurement {
            score: scored.score,
            percentage: scored.percentage,
            interpretation: scored.interpretation,
            responses: request.responses,
            notes: request.notes,
            body_region: request.body_region,
            measured_at,
            updated_at: Timestamp::now(),
            ..existing
        };
        self.store.put_measurement(&measurement).await?;

        info!(measurement_id = %id, score = measurement.score, "measurement updated");
        AuditEvent::new(
            "measurement.updated",
            "measurement",
            id,
            measurement.patient_id,
            measurement.clinic_id,
        )
        .with_details(json!({ "score": measurement.score }))
        .emit();

        Ok(measurement)
    }

    pub async fn delete_measurement(
        &self,
        id: Uuid,
        patient_id: Uuid,
        clinic_id: Uuid,
    ) -> Result<(), ServiceError> {
        self.owned_measurement(id, patient_id, clinic_id).await?;
        self.store.delete_measurement(id).await?;

        info!(measurement_id = %id, "measurement deleted");
        AuditEvent::new("measurement.deleted", "measurement", id, patient_id, clinic_id).emit();
        Ok(())
    }

    /// Progress for one patient on one measure type, from the full history.
    ///
    /// The target comes from the definition of the latest measurement.
    pub async fn progress(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> Result<ProgressResult, ServiceError> {
        let history = self.store.get_history(patient_id, measure_type).await?;
        let Some(latest) = history.last() else {
            return Err(OutcomesError::EmptyHistory {
                patient_id,
                measure_type,
            }
            .into());
        };

        let definition = self.definition(latest.definition_id).await?;
        Ok(calculate_progress(
            patient_id,
            measure_type,
            &definition,
            &history,
        )?)
    }

    /// Compare a re-evaluation and store it as one batch.
    pub async fn reevaluate(
        &self,
        request: ReevaluationRequest,
    ) -> Result<ComparisonBatch, ServiceError> {
        let batch = compare(&request, Timestamp::now())?;
        self.store.put_batch(&batch).await?;

        AuditEvent::new(
            "reevaluation.recorded",
            "reevaluation",
            batch.id,
            batch.patient_id,
            batch.clinic_id,
        )
        .with_details(json!({
            "clinician_id": batch.clinician_id,
            "summary": batch.summary,
        }))
        .emit();

        Ok(batch)
    }

    pub async fn definitions(&self) -> Result<Vec<MeasureDefinition>, ServiceError> {
        Ok(self.store.list_definitions().await?)
    }

    /// Add a library definition for every catalog measure whose type the
    /// library does not define yet. Returns the definitions written.
    pub async fn seed_catalog(&self) -> Result<Vec<MeasureDefinition>, ServiceError> {
        let existing = self.store.list_definitions().await?;

        let mut created = Vec::new();
        for measure in all_measures() {
            if existing
                .iter()
                .any(|d| d.measure_type == measure.measure_type())
            {
                continue;
            }
            let definition = measure.to_definition(Uuid::new_v4());
            self.store.put_definition(&definition).await?;
            created.push(definition);
        }

        info!(created = created.len(), "measure catalog seeded");
        Ok(created)
    }
}
