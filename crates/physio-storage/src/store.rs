use std::future::Future;

use physio_core::models::comparison::ComparisonBatch;
use physio_core::models::definition::MeasureDefinition;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::Measurement;
use uuid::Uuid;

use crate::error::StorageError;

/// Persistence collaborator for measurements, the measure library, and
/// re-evaluation batches.
///
/// Implementations must give read-after-write consistency for
/// [`MeasurementStore::get_last_measurement`]; the re-assessment interval
/// check depends on it.
pub trait MeasurementStore: Send + Sync {
    fn get_definition(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<MeasureDefinition>, StorageError>> + Send;

    fn list_definitions(
        &self,
    ) -> impl Future<Output = Result<Vec<MeasureDefinition>, StorageError>> + Send;

    fn put_definition(
        &self,
        definition: &MeasureDefinition,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn get_measurement(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<Measurement>, StorageError>> + Send;

    /// All measurements of one type for a patient, oldest first.
    fn get_history(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> impl Future<Output = Result<Vec<Measurement>, StorageError>> + Send;

    /// The most recent measurement of one type for a patient.
    fn get_last_measurement(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> impl Future<Output = Result<Option<Measurement>, StorageError>> + Send;

    /// Insert or replace a measurement.
    fn put_measurement(
        &self,
        measurement: &Measurement,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn delete_measurement(&self, id: Uuid) -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Write a whole re-evaluation batch. All items land or none do.
    fn put_batch(
        &self,
        batch: &ComparisonBatch,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;

    fn get_batch(
        &self,
        id: Uuid,
    ) -> impl Future<Output = Result<Option<ComparisonBatch>, StorageError>> + Send;
}

/// Order a patient's measurements oldest first. Ties keep creation order.
pub fn sort_history(history: &mut [Measurement]) {
    history.sort_by(|a, b| {
        a.measured_at
            .cmp(&b.measured_at)
            .then(a.created_at.cmp(&b.created_at))
    });
}
