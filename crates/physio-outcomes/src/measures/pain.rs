use physio_core::models::measure_type::MeasureType;

use crate::Measure;
use crate::scoring::ScoreRange;

/// VAS: Visual Analogue Scale for pain intensity.
/// Single 0–10 line mark; lower is better.
pub struct Vas;

impl Measure for Vas {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Vas
    }

    fn name_en(&self) -> &str {
        "Visual Analogue Scale"
    }

    fn name_pt(&self) -> &str {
        "Escala Visual Analógica"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 10.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(2.0)
    }
}

/// NPRS: Numeric Pain Rating Scale, 0 (no pain) to 10 (worst imaginable).
pub struct Nprs;

impl Measure for Nprs {
    fn measure_type(&self) -> MeasureType {
        MeasureType::Nprs
    }

    fn name_en(&self) -> &str {
        "Numeric Pain Rating Scale"
    }

    fn name_pt(&self) -> &str {
        "Escala Numérica de Dor"
    }

    fn range(&self) -> ScoreRange {
        ScoreRange::new(0.0, 10.0)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn reference_mcid(&self) -> Option<f64> {
        Some(2.0)
    }
}
