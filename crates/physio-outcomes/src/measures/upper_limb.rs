use physio_core::models::definition::ScoringMethod;
use physio_core::models::measure_type::MeasureType;

use crate::Measure;
use crate::scoring::ScoreRange;

const UPPER_LIMB: &[&str] = &["shoulder", "elbow", "wrist", "hand"];

/// DASH: Disabilities of the Arm, Shoulder and Hand. 30 items, 0–100.
pub struct Dash;

impl Measure for Dash {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Dash
    }

    fn name_en(&self) -> &str {
        "Disabilities of the Arm, Shoulder and Hand"
    }

    fn name_pt(&self) -> &str {
        "Disfunções do Braço, Ombro e Mão"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 100.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(10.8)
    }

    fn scoring_method(&self) -> ScoringMethod {
        ScoringMethod::Average
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(UPPER_LIMB)
    }
}

/// QuickDASH: 11-item short form of DASH, same 0–100 scale.
pub struct QuickDash;

impl Measure for QuickDash {
    fn measure_type(&self) -> MeasureType {
        MeasureType::QuickDash
    }

    fn name_en(&self) -> &str {
        "QuickDASH"
    }

    fn name_pt(&self) -> &str {
        "QuickDASH"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 100.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(8.0)
    }

    fn scoring_method(&self) -> ScoringMethod {
        ScoringMethod::Average
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(UPPER_LIMB)
    }
}

/// SPADI: Shoulder Pain and Disability Index, 0–100.
pub struct Spadi;

impl Measure for Spadi {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Spadi
    }

    fn name_en(&self) -> &str {
        "Shoulder Pain and Disability Index"
    }

    fn name_pt(&self) -> &str {
        "Índice de Dor e Incapacidade do Ombro"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 100.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(13.2)
    }

    fn scoring_method(&self) -> ScoringMethod {
        ScoringMethod::Average
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(&["shoulder"])
    }
}
