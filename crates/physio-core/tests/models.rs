use physio_core::models::definition::{MeasureDefinition, ScoringMethod};
use physio_core::models::localized::LocalizedText;
use physio_core::models::measure_type::MeasureType;
use uuid::Uuid;

fn definition(higher_is_better: bool) -> MeasureDefinition {
    MeasureDefinition {
        id: Uuid::new_v4(),
        measure_type: MeasureType::Custom,
        name: LocalizedText::new("Grip strength", "Força de preensão"),
        min_score: 0.0,
        max_score: 60.0,
        higher_is_better,
        mcid: None,
        scoring_method: None,
        body_regions: None,
    }
}

#[test]
fn measure_type_parses_its_wire_name() {
    for measure_type in MeasureType::ALL {
        let parsed: MeasureType = measure_type.as_str().parse().unwrap();
        assert_eq!(parsed, measure_type);
        assert_eq!(
            serde_json::to_value(measure_type).unwrap(),
            serde_json::Value::String(measure_type.to_string())
        );
    }
    assert_eq!("quick_dash".parse::<MeasureType>().unwrap(), MeasureType::QuickDash);
    assert!("QuickDASH".parse::<MeasureType>().is_err());
}

#[test]
fn target_score_follows_direction() {
    assert_eq!(definition(true).target_score(), 60.0);
    assert_eq!(definition(false).target_score(), 0.0);
}

#[test]
fn scoring_method_defaults_to_sum() {
    let mut d = definition(true);
    assert_eq!(d.scoring_method(), ScoringMethod::Sum);
    d.scoring_method = Some(ScoringMethod::Average);
    assert_eq!(d.scoring_method(), ScoringMethod::Average);
}
