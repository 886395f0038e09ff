use std::path::PathBuf;

use physio_core::models::comparison::ComparisonBatch;
use physio_core::models::definition::MeasureDefinition;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::Measurement;
use physio_core::storage_keys;
use tracing::info;
use uuid::Uuid;

use crate::error::StorageError;
use crate::objects;
use crate::state;
use crate::store::{MeasurementStore, sort_history};

/// Store backed by a directory of JSON files, one per record, laid out by
/// [`storage_keys`]. A re-evaluation batch is a single file, so it is written
/// atomically.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn patient_measurements(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> Result<Vec<Measurement>, StorageError> {
        let all: Vec<Measurement> =
            state::load_all_json(&self.root, storage_keys::MEASUREMENTS_PREFIX).await?;
        Ok(all
            .into_iter()
            .filter(|m| m.patient_id == patient_id && m.measure_type == measure_type)
            .collect())
    }
}

impl MeasurementStore for FileStore {
    async fn get_definition(&self, id: Uuid) -> Result<Option<MeasureDefinition>, StorageError> {
        state::load_json(&self.root, &storage_keys::definition(id)).await
    }

    async fn list_definitions(&self) -> Result<Vec<MeasureDefinition>, StorageError> {
        let mut definitions: Vec<MeasureDefinition> =
            state::load_all_json(&self.root, storage_keys::DEFINITIONS_PREFIX).await?;
        definitions.sort_by_key(|d| (d.measure_type, d.id));
        Ok(definitions)
    }

    async fn put_definition(&self, definition: &MeasureDefinition) -> Result<(), StorageError> {
        state::save_json(&self.root, &storage_keys::definition(definition.id), definition).await
    }

    async fn get_measurement(&self, id: Uuid) -> Result<Option<Measurement>, StorageError> {
        state::load_json(&self.root, &storage_keys::measurement(id)).await
    }

    async fn get_history(
        &self,
        patient_id: Uuid,
        measure_type: MeasureType,
    ) -> Result<Vec<Measurement>, StorageError> {
        let mut history = self.patient_measurements(patient_id, measure_type).await?;
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
        state::save_json(&self.root, &storage_keys::measurement(measurement.id), measurement).await
    }

    async fn delete_measurement(&self, id: Uuid) -> Result<(), StorageError> {
        objects::delete_object(&self.root, &storage_keys::measurement(id)).await
    }

    async fn put_batch(&self, batch: &ComparisonBatch) -> Result<(), StorageError> {
        let key = storage_keys::reevaluation(batch.id);
        state::create_json(&self.root, &key, batch).await?;
        info!(key = %key, items = batch.items.len(), "re-evaluation batch written");
        Ok(())
    }

    async fn get_batch(&self, id: Uuid) -> Result<Option<ComparisonBatch>, StorageError> {
        state::load_json(&self.root, &storage_keys::reevaluation(id)).await
    }
}
