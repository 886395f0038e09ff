use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Parallel English / Portuguese text, as supplied by the measure library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LocalizedText {
    pub en: String,
    pub pt: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, pt: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            pt: pt.into(),
        }
    }
}
