use physio_core::models::comparison::{ComparisonDomain, ComparisonItemRequest, ReevaluationRequest};
use physio_core::models::definition::{MeasureDefinition, ScoringMethod};
use physio_core::models::localized::LocalizedText;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::{
    MeasurementResponse, RecordMeasurementRequest, Severity, UpdateMeasurementRequest,
};
use physio_core::models::progress::Trend;
use physio_service::OutcomesService;
use physio_service::config::ServiceConfig;
use physio_service::error::ServiceError;
use physio_storage::fs::FileStore;
use physio_storage::memory::MemoryStore;
use physio_storage::store::MeasurementStore;
use uuid::Uuid;

struct Visit {
    patient_id: Uuid,
    clinic_id: Uuid,
    clinician_id: Uuid,
}

impl Visit {
    fn new() -> Self {
        Self {
            patient_id: Uuid::new_v4(),
            clinic_id: Uuid::new_v4(),
            clinician_id: Uuid::new_v4(),
        }
    }

    fn record(
        &self,
        definition_id: Uuid,
        values: &[f64],
        measured_at: &str,
    ) -> RecordMeasurementRequest {
        RecordMeasurementRequest {
            patient_id: self.patient_id,
            clinic_id: self.clinic_id,
            clinician_id: self.clinician_id,
            definition_id,
            responses: responses(values),
            notes: None,
            body_region: None,
            measured_at: Some(measured_at.to_string()),
        }
    }
}

fn responses(values: &[f64]) -> Vec<MeasurementResponse> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| MeasurementResponse {
            question_id: format!("item_{}", i + 1),
            value: *value,
        })
        .collect()
}

fn nprs() -> MeasureDefinition {
    MeasureDefinition {
        id: Uuid::new_v4(),
        measure_type: MeasureType::Nprs,
        name: LocalizedText::new("Numeric Pain Rating Scale", "Escala Numérica de Dor"),
        min_score: 0.0,
        max_score: 10.0,
        higher_is_better: false,
        mcid: Some(2.0),
        scoring_method: Some(ScoringMethod::Sum),
        body_regions: None,
    }
}

fn lefs() -> MeasureDefinition {
    MeasureDefinition {
        id: Uuid::new_v4(),
        measure_type: MeasureType::Lefs,
        name: LocalizedText::new(
            "Lower Extremity Functional Scale",
            "Escala Funcional de Extremidade Inferior",
        ),
        min_score: 0.0,
        max_score: 80.0,
        higher_is_better: true,
        mcid: Some(9.0),
        scoring_method: None,
        body_regions: Some(vec!["knee".to_string(), "hip".to_string()]),
    }
}

async fn service_with(definitions: &[MeasureDefinition]) -> OutcomesService<MemoryStore> {
    let store = MemoryStore::new();
    for definition in definitions {
        store.put_definition(definition).await.unwrap();
    }
    OutcomesService::new(store, ServiceConfig::default())
}

#[tokio::test]
async fn records_derived_fields() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();

    let m = service
        .record_measurement(visit.record(def.id, &[7.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap();

    assert_eq!(m.score, 7.0);
    assert_eq!(m.percentage, Some(70.0));
    assert_eq!(m.measure_type, MeasureType::Nprs);
    let interpretation = m.interpretation.unwrap();
    // lower is better: 7/10 pain inverts to 30%
    assert_eq!(interpretation.severity, Severity::Moderate);
    assert!(service.store().get_measurement(m.id).await.unwrap().is_some());
}

#[tokio::test]
async fn out_of_range_score_is_rejected_and_not_stored() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();

    let err = service
        .record_measurement(visit.record(def.id, &[6.0, 6.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "score_out_of_range");
    assert!(err.is_user_correctable());
    assert!(
        service
            .store()
            .get_history(visit.patient_id, MeasureType::Nprs)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn unknown_definition_is_not_found() {
    let service = service_with(&[]).await;
    let err = service
        .record_measurement(Visit::new().record(Uuid::new_v4(), &[1.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            resource: "measure definition",
            ..
        }
    ));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn reassessment_inside_window_is_rejected() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();

    service
        .record_measurement(visit.record(def.id, &[8.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap();

    let err = service
        .record_measurement(visit.record(def.id, &[6.0], "2025-01-19T09:00:00Z"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "reassessment_too_soon");
    assert!(err.message().en.contains("2025-01-06T09:00:00Z"));

    service
        .record_measurement(visit.record(def.id, &[6.0], "2025-01-20T09:00:00Z"))
        .await
        .unwrap();
}

#[tokio::test]
async fn interval_is_per_patient_and_type() {
    let pain = nprs();
    let function = lefs();
    let service = service_with(&[pain.clone(), function.clone()]).await;
    let visit = Visit::new();

    service
        .record_measurement(visit.record(pain.id, &[8.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap();
    service
        .record_measurement(visit.record(function.id, &[2.0, 3.0], "2025-01-07T09:00:00Z"))
        .await
        .unwrap();
    service
        .record_measurement(Visit::new().record(pain.id, &[5.0], "2025-01-07T09:00:00Z"))
        .await
        .unwrap();
}

#[tokio::test]
async fn body_region_mismatch_does_not_block() {
    let def = lefs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();

    let mut request = visit.record(def.id, &[3.0, 4.0], "2025-01-06T09:00:00Z");
    request.body_region = Some("shoulder".to_string());

    let m = service.record_measurement(request).await.unwrap();
    assert_eq!(m.body_region.as_deref(), Some("shoulder"));
}

#[tokio::test]
async fn bare_date_is_rejected() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let err = service
        .record_measurement(Visit::new().record(def.id, &[3.0], "2025-01-06"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "invalid_timestamp");
}

#[tokio::test]
async fn update_recomputes_everything() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();
    let original = service
        .record_measurement(visit.record(def.id, &[9.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap();

    let updated = service
        .update_measurement(
            original.id,
            UpdateMeasurementRequest {
                patient_id: visit.patient_id,
                clinic_id: visit.clinic_id,
                responses: responses(&[1.0]),
                notes: Some("corrected transcription".to_string()),
                body_region: None,
                measured_at: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.score, 1.0);
    assert_eq!(updated.percentage, Some(10.0));
    assert_eq!(updated.interpretation.unwrap().severity, Severity::Minimal);
    assert_eq!(updated.measured_at, original.measured_at);
    assert_eq!(updated.created_at, original.created_at);
    assert_eq!(updated.clinician_id, original.clinician_id);
}

#[tokio::test]
async fn update_and_delete_enforce_ownership() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();
    let m = service
        .record_measurement(visit.record(def.id, &[4.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap();

    let err = service
        .update_measurement(
            m.id,
            UpdateMeasurementRequest {
                patient_id: Uuid::new_v4(),
                clinic_id: visit.clinic_id,
                responses: responses(&[2.0]),
                notes: None,
                body_region: None,
                measured_at: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Ownership { .. }));
    assert!(!err.is_user_correctable());

    let err = service
        .delete_measurement(m.id, visit.patient_id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(err.code(), "ownership_mismatch");
    assert!(service.store().get_measurement(m.id).await.unwrap().is_some());

    service
        .delete_measurement(m.id, visit.patient_id, visit.clinic_id)
        .await
        .unwrap();
    let err = service
        .delete_measurement(m.id, visit.patient_id, visit.clinic_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ServiceError::NotFound {
            resource: "measurement",
            ..
        }
    ));
}

#[tokio::test]
async fn progress_over_recorded_history() {
    let def = nprs();
    let service = service_with(&[def.clone()]).await;
    let visit = Visit::new();

    for (score, at) in [
        (8.0, "2025-01-06T09:00:00Z"),
        (6.0, "2025-01-20T09:00:00Z"),
        (4.0, "2025-02-03T09:00:00Z"),
    ] {
        service
            .record_measurement(visit.record(def.id, &[score], at))
            .await
            .unwrap();
    }

    let progress = service.progress(visit.patient_id, MeasureType::Nprs).await.unwrap();
    assert_eq!(progress.baseline_score, 8.0);
    assert_eq!(progress.previous_score, Some(6.0));
    assert_eq!(progress.current_score, 4.0);
    assert_eq!(progress.change, -4.0);
    assert!((progress.change_percent - 50.0).abs() < 1e-9);
    assert!(progress.mcid_achieved);
    assert_eq!(progress.trend, Trend::Improved);
    assert_eq!(progress.total_measurements, 3);
}

#[tokio::test]
async fn progress_without_history_is_not_found() {
    let service = service_with(&[nprs()]).await;
    let err = service
        .progress(Uuid::new_v4(), MeasureType::Nprs)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.code(), "not_found");
    assert!(!err.is_user_correctable());
    assert!(err.message().en.contains("no nprs measurements recorded"));
}

#[tokio::test]
async fn reevaluation_is_stored_as_one_batch() {
    let service = service_with(&[]).await;
    let visit = Visit::new();

    let batch = service
        .reevaluate(ReevaluationRequest {
            patient_id: visit.patient_id,
            clinic_id: visit.clinic_id,
            clinician_id: visit.clinician_id,
            assessed_at: Some("2025-02-03T10:00:00Z".to_string()),
            notes: Some("6-week re-evaluation".to_string()),
            items: vec![
                ComparisonItemRequest {
                    domain: ComparisonDomain::RangeOfMotion,
                    label: "Knee extension deficit".to_string(),
                    current_value: 5.0,
                    baseline_value: 15.0,
                    higher_is_better: false,
                    mcid_threshold: Some(5.0),
                },
                ComparisonItemRequest {
                    domain: ComparisonDomain::MuscleStrength,
                    label: "Hip abductors".to_string(),
                    current_value: 4.0,
                    baseline_value: 3.0,
                    higher_is_better: true,
                    mcid_threshold: None,
                },
            ],
        })
        .await
        .unwrap();

    assert_eq!(batch.summary.total_items, 2);
    assert_eq!(batch.summary.improved, 2);
    assert_eq!(batch.summary.mcid_achieved, 1);
    assert_eq!(service.store().batch_count().await, 1);
    let stored = service.store().get_batch(batch.id).await.unwrap().unwrap();
    assert_eq!(stored.items.len(), 2);
}

#[tokio::test]
async fn failed_reevaluation_writes_nothing() {
    let service = service_with(&[]).await;
    let visit = Visit::new();

    let err = service
        .reevaluate(ReevaluationRequest {
            patient_id: visit.patient_id,
            clinic_id: visit.clinic_id,
            clinician_id: visit.clinician_id,
            assessed_at: Some("03/02/2025".to_string()),
            notes: None,
            items: vec![ComparisonItemRequest {
                domain: ComparisonDomain::Other,
                label: "Grip strength".to_string(),
                current_value: 30.0,
                baseline_value: 22.0,
                higher_is_better: true,
                mcid_threshold: Some(6.5),
            }],
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "invalid_timestamp");
    assert_eq!(service.store().batch_count().await, 0);
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let service = OutcomesService::new(FileStore::new(dir.path()), ServiceConfig::default());

    let created = service.seed_catalog().await.unwrap();
    assert_eq!(created.len(), MeasureType::ALL.len() - 1);
    assert!(service.seed_catalog().await.unwrap().is_empty());
    assert_eq!(service.definitions().await.unwrap().len(), created.len());
}

#[tokio::test]
async fn custom_interval_is_honoured() {
    let def = nprs();
    let store = MemoryStore::new();
    store.put_definition(&def).await.unwrap();
    let service = OutcomesService::new(
        store,
        ServiceConfig {
            reassessment_interval_days: 7,
        },
    );
    let visit = Visit::new();

    service
        .record_measurement(visit.record(def.id, &[8.0], "2025-01-06T09:00:00Z"))
        .await
        .unwrap();
    service
        .record_measurement(visit.record(def.id, &[7.0], "2025-01-13T09:00:00Z"))
        .await
        .unwrap();
}
