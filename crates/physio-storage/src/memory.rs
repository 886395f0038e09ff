use std::collections::HashMap;

use physio_core::models::comparison::ComparisonBatch;
use physio_core::models::definition::MeasureDefinition;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::Measurement;
use physio_core::storage_keys;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{MeasurementStore, sort_history};

/// Process-local store. Suitable for tests and for embedding the service
/// where persistence happens elsewhere.
#[derive(Debug, Default)]
pub struct MemoryStore {
    definitions: RwLock<HashMap<Uuid, MeasureDefinition>>,
    measurements: RwLock<HashMap<Uuid, Measurement>>,
    batches: RwLock<HashMap<Uuid, ComparisonBatch>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored re-evaluation batches.
    pub async fn batch_count(&self) -> usize {
        self.batches.read().await.len()
    }
}

impl MeasurementStore for MemoryStore {
    async fn get_definition(&self, id: Uuid) -> Result<Option<MeasureDefinition>, StorageError> {
        Ok(self.definitions.read().await.get(&id).cloned())
    }

    async fn list_definitions(&self) -> Result<Vec<MeasureDefinition>, StorageError> {
        let mut definitions: Vec<_> = self.definitions.read().await.values().cloned().collect();
        definitions.sort_by_key(|d| (d.measure_type, d.id));
        Ok(definitions)
    }

    async fn put_definition(&self, definition: &MeasureDefinition) -> Result<(), StorageError> {
        self.definitions
            .write()
            .await
            .insert(definition.id, definition.clone());
        Ok(())
    }

    async fn get_measurement(&self, id: Uuid) -> Result<Option<Measurement>, StorageError> {
        Ok(self.measurements.read().await.get(&id).cloned())
    }

    async fn get_history(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> Result<Vec<Measurement>, StorageError> {
        let mut history: Vec<_> = self
            .measurements
            .read()
            .await
            .values()
            .filter(|m| m.patient_id == patient_id && m.measure_type == measure_type)
            .cloned()
            .collect();
        sort_history(&mut history);
        Ok(history)
    }

    async fn get_last_measurement(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> Result<Option<Measurement>, StorageError> {
        Ok(self.get_history(patient_id, measure_type).await?.pop())
    }

    async fn put_measurement(&self, measurement: &Measurement) -> Result<(), StorageError> {
        self.measurements
            .write()
            .await
            .insert(measurement.id, measurement.clone());
        Ok(())
    }

    async fn delete_measurement(&self, id: Uuid) -> Result<(), StorageError> {
        match self.measurements.write().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StorageError::NotFound {
                key: storage_keys::measurement(id),
            }),
        }
    }

    async fn put_batch(&self, batch: &ComparisonBatch) -> Result<(), StorageError> {
        let mut batches = self.batches.write().await;
        if batches.contains_key(&batch.id) {
            return Err(StorageError::AlreadyExists {
                key: storage_keys::reevaluation(batch.id),
            });
        }
        batches.insert(batch.id, batch.clone());
        Ok(())
    }

    async fn get_batch(&self, id: Uuid) -> Result<Option<ComparisonBatch>, StorageError> {
        Ok(self.batches.read().await.get(&id).cloned())
    }
}
