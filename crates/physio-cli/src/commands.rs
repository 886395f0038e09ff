use std::path::Path;

use physio_core::models::comparison::ReevaluationRequest;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::{RecordMeasurementRequest, UpdateMeasurementRequest};
use physio_service::OutcomesService;
use physio_service::error::ServiceError;
use physio_storage::fs::FileStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

pub type Service = OutcomesService<FileStore>;

fn read_request<T: DeserializeOwned>(path: &Path) -> eyre::Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("invalid request in {}: {e}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Turn a service error into a report carrying the error code and both
/// message translations.
fn report(e: ServiceError) -> eyre::Report {
    let message = e.message();
    eyre::eyre!("[{}] {} / {}", e.code(), message.en, message.pt)
}

pub async fn seed(service: &Service) -> eyre::Result<()> {
    let created = service.seed_catalog().await.map_err(report)?;
    for definition in &created {
        println!("{}  {}", definition.id, definition.name.en);
    }
    println!("{} definitions added", created.len());
    Ok(())
}

pub async fn measures(service: &Service) -> eyre::Result<()> {
    for d in service.definitions().await.map_err(report)? {
        let direction = if d.higher_is_better { "higher" } else { "lower" };
        let mcid = d.mcid.map(|m| m.to_string()).unwrap_or_else(|| "-".to_string());
        println!(
            "{}  {:<10}  [{}, {}]  {} is better  mcid {}  {}",
            d.id, d.measure_type, d.min_score, d.max_score, direction, mcid, d.name.en
        );
    }
    Ok(())
}

pub async fn record(service: &Service, request: &Path) -> eyre::Result<()> {
    let request: RecordMeasurementRequest = read_request(request)?;
    let measurement = service.record_measurement(request).await.map_err(report)?;
    print_json(&measurement)
}

pub async fn update(service: &Service, id: Uuid, request: &Path) -> eyre::Result<()> {
    let request: UpdateMeasurementRequest = read_request(request)?;
    let measurement = service
        .update_measurement(id, request)
        .await
        .map_err(report)?;
    print_json(&measurement)
}

pub async fn delete(
    service: &Service,
    id: Uuid,
    patient_id: Uuid,
    clinic_id: Uuid,
) -> eyre::Result<()> {
    service
        .delete_measurement(id, patient_id, clinic_id)
        .await
        .map_err(report)?;
    println!("deleted {id}");
    Ok(())
}

pub async fn progress(
    service: &Service,
    patient_id: Uuid,
    measure_type: MeasureType,
) -> eyre::Result<()> {
    let progress = service
        .progress(patient_id, measure_type)
        .await
        .map_err(report)?;
    print_json(&progress)
}

pub async fn compare(service: &Service, request: &Path) -> eyre::Result<()> {
    let request: ReevaluationRequest = read_request(request)?;
    let batch = service.reevaluate(request).await.map_err(report)?;
    print_json(&batch)
}
