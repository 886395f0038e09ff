use physio_outcomes::validation::REASSESSMENT_INTERVAL_DAYS;
use serde::{Deserialize, Serialize};

/// Tunables of the outcomes service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Minimum days between two measurements of the same type for one
    /// patient.
    #[serde(default = "default_reassessment_interval_days")]
    pub reassessment_interval_days: u32,
}

fn default_reassessment_interval_days() -> u32 {
    REASSESSMENT_INTERVAL_DAYS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            reassessment_interval_days: REASSESSMENT_INTERVAL_DAYS,
        }
    }
}
