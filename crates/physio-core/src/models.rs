pub mod comparison;
pub mod definition;
pub mod localized;
pub mod measure_type;
pub mod measurement;
pub mod progress;
