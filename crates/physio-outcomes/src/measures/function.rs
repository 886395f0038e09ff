use physio_core::models::definition::ScoringMethod;
use physio_core::models::measure_type::MeasureType;

use crate::Measure;
use crate::scoring::ScoreRange;

/// Berg Balance Scale. 14 tasks rated 0–4, total 0–56.
pub struct Berg;

impl Measure for Berg {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Berg
    }

    fn name_en(&self) -> &str {
        "Berg Balance Scale"
    }

    fn name_pt(&self) -> &str {
        "Escala de Equilíbrio de Berg"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 56.0)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(4.0)
    }
}

/// PSFS: Patient-Specific Functional Scale.
/// Up to five patient-chosen activities rated 0–10, averaged.
pub struct Psfs;

impl Measure for Psfs {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Psfs
    }

    fn name_en(&self) -> &str {
        "Patient-Specific Functional Scale"
    }

    fn name_pt(&self) -> &str {
        "Escala Funcional Específica do Paciente"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 10.0)
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(2.0)
    }

    fn scoring_method(&self) -> ScoringMethod {
        ScoringMethod::Average
    }
}
