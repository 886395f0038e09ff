use physio_core::models::measure_type::MeasureType;

use crate::Measure;
use crate::scoring::ScoreRange;

/// ODI: Oswestry Disability Index.
/// 10 sections scored 0–5, reported as a 0–100 percentage. Lower is better.
pub struct Odi;

impl Measure for Odi {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Odi
    }

    fn name_en(&self) -> &str {
        "Oswestry Disability Index"
    }

    fn name_pt(&self) -> &str {
        "Índice de Incapacidade de Oswestry"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 100.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(10.0)
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(&["lumbar"])
    }
}

/// NDI: Neck Disability Index. 10 items scored 0–5, total 0–50.
pub struct Ndi;

impl Measure for Ndi {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Ndi
    }

    fn name_en(&self) -> &str {
        "Neck Disability Index"
    }

    fn name_pt(&self) -> &str {
        "Índice de Incapacidade Cervical"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 50.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(7.5)
    }

    fn body_regions(&self) -> Option<&[&str]> {
        Some(&["cervical"])
    }
}
