use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// The family of standardized outcome measures the practice records.
///
/// Dispatch on a measure type is always an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeasureType {
    /// Visual Analogue Scale for pain (0–10).
    Vas,
    /// Numeric Pain Rating Scale (0–10).
    Nprs,
    /// Oswestry Disability Index.
    Odi,
    /// Neck Disability Index.
    Ndi,
    /// Disabilities of the Arm, Shoulder and Hand.
    Dash,
    /// QuickDASH, the 11-item short form of DASH.
    QuickDash,
    /// Shoulder Pain and Disability Index.
    Spadi,
    /// Lower Extremity Functional Scale.
    Lefs,
    /// Knee injury and Osteoarthritis Outcome Score.
    Koos,
    /// Western Ontario and McMaster Universities Osteoarthritis Index.
    Womac,
    /// Berg Balance Scale.
    Berg,
    /// Patient-Specific Functional Scale.
    Psfs,
    /// Clinic-defined measure with no reference range.
    Custom,
}

impl MeasureType {
    pub const ALL: [MeasureType; 13] = [
        MeasureType::Vas,
        MeasureType::Nprs,
        MeasureType::Odi,
        MeasureType::Ndi,
        MeasureType::Dash,
        MeasureType::QuickDash,
        MeasureType::Spadi,
        MeasureType::Lefs,
        MeasureType::Koos,
        MeasureType::Womac,
        MeasureType::Berg,
        MeasureType::Psfs,
        MeasureType::Custom,
    ];

    /// Wire identifier, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            MeasureType::Vas => "vas",
            MeasureType::Nprs => "nprs",
            MeasureType::Odi => "odi",
            MeasureType::Ndi => "ndi",
            MeasureType::Dash => "dash",
            MeasureType::QuickDash => "quick_dash",
            MeasureType::Spadi => "spadi",
            MeasureType::Lefs => "lefs",
            MeasureType::Koos => "koos",
            MeasureType::Womac => "womac",
            MeasureType::Berg => "berg",
            MeasureType::Psfs => "psfs",
            MeasureType::Custom => "custom",
        }
    }
}

impl fmt::Display for MeasureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MeasureType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CoreError::UnknownMeasureType(s.to_string()))
    }
}
