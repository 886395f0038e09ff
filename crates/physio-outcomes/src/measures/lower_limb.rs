use physio_core::models::definition::ScoringMethod;
use physio_core::models::measure_type::MeasureType;

use crate::Measure;
use crate::scoring::ScoreRange;

/// LEFS: Lower Extremity Functional Scale.
/// 20 items rated 0–4, total 0–80. Higher is better.
pub struct Lefs;

impl Measure for Lefs {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Lefs
    }

    fn name_en(&self) -> &str {
        "Lower Extremity Functional Scale"
    }

    fn name_pt(&self) -> &str {
        "Escala Funcional de Extremidade Inferior"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 80.0)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(9.0)
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(&["hip", "knee", "ankle", "foot"])
    }
}

/// KOOS: Knee injury and Osteoarthritis Outcome Score, normalized 0–100.
pub struct Koos;

impl Measure for Koos {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Koos
    }

    fn name_en(&self) -> &str {
        "Knee injury and Osteoarthritis Outcome Score"
    }

    fn name_pt(&self) -> &str {
        "Escore de Lesão no Joelho e Osteoartrite"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 100.0)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(8.0)
    }

    fn scoring_method(&self) -> ScoringMethod {
        ScoringMethod::Average
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(&["knee"])
    }
}

/// WOMAC: 24 items rated 0–4, total 0–96. Lower is better.
pub struct Womac;

impl Measure for Womac {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Womac
    }

    fn name_en(&self) -> &str {
        "Western Ontario and McMaster Universities Osteoarthritis Index"
    }

    fn name_pt(&self) -> &str {
        "Índice de Osteoartrite WOMAC"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 96.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(12.0)
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(&["hip", "knee"])
    }
}
