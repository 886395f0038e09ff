use jiff::{SignedDuration, Timestamp};
use physio_core::models::definition::MeasureDefinition;
use physio_core::models::localized::LocalizedText;
use physio_core::models::measure_type::MeasureType;
use physio_core::models::measurement::Measurement;
use physio_outcomes::error::OutcomesError;
use physio_outcomes::reference_measure;
use physio_outcomes::scoring::{ScoreRange, ValidationCode};
use physio_outcomes::validation::{
    REASSESSMENT_INTERVAL_DAYS, RegionCompatibility, check_body_region,
    check_reassessment_interval, parse_timestamp, validate_definition, validate_score_range,
};
use uuid::Uuid;

fn definition(measure_type: MeasureType, min: f64, max: f64) -> MeasureDefinition {
    MeasureDefinition {
        id: Uuid::new_v4(),
        measure_type,
        name: LocalizedText::new("Scale", "Escala"),
        min_score: min,
        max_score: max,
        higher_is_better: false,
        mcid: None,
        scoring_method: None,
        body_regions: None,
    }
}

fn measurement_at(measured_at: Timestamp) -> Measurement {
    Measurement {
        id: Uuid::new_v4(),
        patient_id: Uuid::new_v4(),
        clinic_id: Uuid::new_v4(),
        clinician_id: Uuid::new_v4(),
        definition_id: Uuid::new_v4(),
        measure_type: MeasureType::Odi,
        score: 40.0,
        percentage: Some(40.0),
        interpretation: None,
        responses: vec![],
        notes: None,
        body_region: None,
        measured_at,
        created_at: measured_at,
        updated_at: measured_at,
    }
}

fn days(n: i64) -> SignedDuration {
    SignedDuration::from_hours(24 * n)
}

#[test]
fn scores_inside_range_are_accepted() {
    let def = definition(MeasureType::Nprs, 0.0, 10.0);
    for score in [0.0, 0.5, 5.0, 9.99, 10.0] {
        assert!(validate_score_range(score, &def).is_ok(), "score {score}");
    }
}

#[test]
fn scores_outside_range_cite_bounds() {
    let def = definition(MeasureType::Nprs, 0.0, 10.0);
    for score in [-0.1, 10.5, 100.0] {
        let err = validate_score_range(score, &def).unwrap_err();
        assert_eq!(err.code, ValidationCode::ScoreOutOfRange);
        assert_eq!(err.value, Some(score));
        assert_eq!(err.expected_range, Some(ScoreRange::new(0.0, 10.0)));
        assert!(err.message.en.contains("[0, 10]"), "{}", err.message.en);
        assert!(err.message.pt.contains("[0, 10]"), "{}", err.message.pt);
    }
}

#[test]
fn definition_bounds_apply_inside_reference_range() {
    // a clinic narrowed ODI to 0-50; reference allows 0-100
    let def = definition(MeasureType::Odi, 0.0, 50.0);
    assert!(validate_score_range(50.0, &def).is_ok());
    let err = validate_score_range(60.0, &def).unwrap_err();
    assert_eq!(err.expected_range, Some(ScoreRange::new(0.0, 50.0)));
}

#[test]
fn reference_range_applies_even_when_definition_is_wider() {
    let def = definition(MeasureType::Nprs, 0.0, 100.0);
    let err = validate_score_range(50.0, &def).unwrap_err();
    assert_eq!(err.expected_range, Some(ScoreRange::new(0.0, 10.0)));
}

#[test]
fn custom_measures_skip_reference_range() {
    assert!(reference_measure(MeasureType::Custom).is_none());
    let def = definition(MeasureType::Custom, -50.0, 500.0);
    assert!(validate_score_range(450.0, &def).is_ok());
    assert!(validate_score_range(501.0, &def).is_err());
}

#[test]
fn inverted_definition_is_invalid() {
    let def = definition(MeasureType::Custom, 10.0, 0.0);
    let err = validate_definition(&def).unwrap_err();
    assert_eq!(err.code, ValidationCode::InvalidDefinition);

    let mut def = definition(MeasureType::Custom, 0.0, 10.0);
    assert!(validate_definition(&def).is_ok());
    def.mcid = Some(0.0);
    assert!(validate_definition(&def).is_err());
    def.mcid = Some(1.5);
    assert!(validate_definition(&def).is_ok());
}

#[test]
fn region_mismatch_is_advisory() {
    let mut def = definition(MeasureType::Odi, 0.0, 100.0);
    def.body_regions = Some(vec!["lumbar".to_string()]);

    assert!(check_body_region(&def, Some("lumbar")).is_compatible());
    assert_eq!(
        check_body_region(&def, Some("Lumbar")),
        RegionCompatibility::Mismatch {
            region: "Lumbar".to_string(),
            applicable: vec!["lumbar".to_string()],
        }
    );
    assert!(!check_body_region(&def, Some("knee")).is_compatible());
}

#[test]
fn global_measures_and_missing_regions_are_compatible() {
    let mut def = definition(MeasureType::Nprs, 0.0, 10.0);
    assert!(check_body_region(&def, Some("knee")).is_compatible());

    def.body_regions = Some(vec!["knee".to_string()]);
    assert!(check_body_region(&def, None).is_compatible());
    assert!(check_body_region(&def, Some("")).is_compatible());
}

#[test]
fn first_measurement_has_no_interval_constraint() {
    let at: Timestamp = "2025-02-01T10:00:00Z".parse().unwrap();
    assert!(check_reassessment_interval(None, at, REASSESSMENT_INTERVAL_DAYS).is_ok());
}

#[test]
fn thirteen_days_is_too_soon() {
    let last_at: Timestamp = "2025-02-01T10:00:00Z".parse().unwrap();
    let last = measurement_at(last_at);
    let err =
        check_reassessment_interval(Some(&last), last_at + days(13), REASSESSMENT_INTERVAL_DAYS)
            .unwrap_err();

    match err {
        OutcomesError::ReassessmentTooSoon {
            measure_type,
            last_measured_at,
            next_allowed_at,
        } => {
            assert_eq!(measure_type, MeasureType::Odi);
            assert_eq!(last_measured_at, last_at);
            assert_eq!(next_allowed_at, last_at + days(14));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn exactly_fourteen_days_is_accepted() {
    let last_at: Timestamp = "2025-02-01T10:00:00Z".parse().unwrap();
    let last = measurement_at(last_at);
    assert!(
        check_reassessment_interval(Some(&last), last_at + days(14), REASSESSMENT_INTERVAL_DAYS)
            .is_ok()
    );
    assert!(
        check_reassessment_interval(
            Some(&last),
            last_at + days(14) - SignedDuration::from_secs(1),
            REASSESSMENT_INTERVAL_DAYS,
        )
        .is_err()
    );
}

#[test]
fn too_soon_error_names_prior_date() {
    let last_at: Timestamp = "2025-02-01T10:00:00Z".parse().unwrap();
    let err = check_reassessment_interval(Some(&measurement_at(last_at)), last_at + days(2), 14)
        .unwrap_err();
    assert_eq!(err.code(), "reassessment_too_soon");
    let message = err.message();
    assert!(message.en.contains("2025-02-01T10:00:00Z"), "{}", message.en);
    assert!(message.pt.contains("2025-02-01T10:00:00Z"), "{}", message.pt);
}

#[test]
fn timestamps_require_time_and_offset() {
    assert!(parse_timestamp("2025-02-01T10:00:00Z").is_ok());
    assert!(parse_timestamp("2025-02-01T10:00:00.250+01:00").is_ok());

    for bad in ["2025-02-01", "2025-02-01T10:00:00", "01/02/2025 10:00", "not a date"] {
        let err = parse_timestamp(bad).unwrap_err();
        assert_eq!(err.code, ValidationCode::InvalidTimestamp, "input: {bad:?}");
    }
}
