use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::localized::LocalizedText;
use super::measure_type::MeasureType;

/// How item responses reduce to a single score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    #[default]
    Sum,
    Average,
}

/// A measure as defined in the practice's measure library.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MeasureDefinition {
    pub id: Uuid,
    pub measure_type: MeasureType,
    pub name: LocalizedText,
    pub min_score: f64,
    pub max_score: f64,
    pub higher_is_better: bool,
    /// Minimal clinically important difference, a positive magnitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcid: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring_method: Option<ScoringMethod>,
    /// Body regions the measure applies to. `None` means it applies everywhere.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_regions: Option<Vec<String>>,
}

impl MeasureDefinition {
    pub fn scoring_method(&self) -> ScoringMethod {
        self.scoring_method.unwrap_or_default()
    }

    /// The best attainable score: the ceiling when higher is better,
    /// otherwise the floor.
    pub fn target_score(&self) -> f64 {
        if self.higher_is_better {
            self.max_score
        } else {
            self.min_score
        }
    }
}
