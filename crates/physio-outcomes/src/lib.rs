//! physio-outcomes
//!
//! Clinical outcome rules. Pure computation with no storage dependency.
//! Scores item responses, validates them against measure bounds, attaches
//! severity interpretations, and derives progress and re-evaluation signals.

pub mod assessment;
pub mod change;
pub mod comparison;
pub mod error;
pub mod interpretation;
pub mod measures;
pub mod progress;
pub mod scoring;
pub mod validation;

use physio_core::models::definition::{MeasureDefinition, ScoringMethod};
use physio_core::models::localized::LocalizedText;
use physio_core::models::measure_type::MeasureType;
use scoring::ScoreRange;
use uuid::Uuid;

/// Trait implemented by each standardized measure in the built-in catalog.
pub trait Measure: Send + Sync {
    fn measure_type(&self) -> MeasureType;

    /// English display name (e.g., "Oswestry Disability Index").
    fn name_en(&self) -> &str;

    /// Portuguese display name.
    fn name_pt(&self) -> &str;

    /// Published score range.
    fn range(&self) -> ScoreRange;

    fn higher_is_better(&self) -> bool;

    /// Published minimal clinically important difference, if any.
    fn reference_mcid(&self) -> Option<f64>;

    fn scoring_method(&self) -> ScoringMethod {
        ScoringMethod::Sum
    }

    /// Regions the measure is validated for. `None` for global measures.
    fn body_regions(&self) -> Option<&[&str]> {
        None
    }

    /// Build a library definition carrying this measure's reference values.
    fn to_definition(&self, id: Uuid) -> MeasureDefinition {
        let range = self.range();
        MeasureDefinition {
            id,
            measure_type: self.measure_type(),
            name: LocalizedText::new(self.name_en(), self.name_pt()),
            min_score: range.min,
            max_score: range.max,
            higher_is_better: self.higher_is_better(),
            mcid: self.reference_mcid(),
            scoring_method: Some(self.scoring_method()),
            body_regions: self
                .body_regions()
                .map(|regions| regions.iter().map(|r| r.to_string()).collect()),
        }
    }
}

/// Look up the catalog entry for a measure type. `Custom` has none.
pub fn reference_measure(measure_type: MeasureType) -> Option<&'static dyn Measure> {
    match measure_type {
        MeasureType::Vas => Some(&measures::pain::Vas),
        MeasureType::Nprs => Some(&measures::pain::Nprs),
        MeasureType::Odi => Some(&measures::spine::Odi),
        MeasureType::Ndi => Some(&measures::spine::Ndi),
        MeasureType::Dash => Some(&measures::upper_limb::Dash),
        MeasureType::QuickDash => Some(&measures::upper_limb::QuickDash),
        MeasureType::Spadi => Some(&measures::upper_limb::Spadi),
        MeasureType::Lefs => Some(&measures::lower_limb::Lefs),
        MeasureType::Koos => Some(&measures::lower_limb::Koos),
        MeasureType::Womac => Some(&measures::lower_limb::Womac),
        MeasureType::Berg => Some(&measures::function::Berg),
        MeasureType::Psfs => Some(&measures::function::Psfs),
        MeasureType::Custom => None,
    }
}

/// Return all catalog measures, in `MeasureType` order.
pub fn all_measures() -> Vec<&'static dyn Measure> {
    MeasureType::ALL
        .into_iter()
        .filter_map(reference_measure)
        .collect()
}
