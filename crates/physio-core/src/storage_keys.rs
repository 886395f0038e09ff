//! Storage key/path conventions.
//!
//! Pure string functions. These define the canonical layout of records in
//! any key-addressed store (file tree, object store).

use uuid::Uuid;

pub const DEFINITIONS_PREFIX: &str = "definitions/";

pub const MEASUREMENTS_PREFIX: &str = "measurements/";

pub const REEVALUATIONS_PREFIX: &str = "reevaluations/";

pub fn definition(id: Uuid) -> String {
    format!("{DEFINITIONS_PREFIX}{id}.json")
}

pub fn measurement(id: Uuid) -> String {
    format!("{MEASUREMENTS_PREFIX}{id}.json")
}

pub fn reevaluation(id: Uuid) -> String {
    format!("{REEVALUATIONS_PREFIX}{id}.json")
}
