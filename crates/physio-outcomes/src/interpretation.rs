use physio_core::models::definition::MeasureDefinition;
use physio_core::models::localized::LocalizedText;
use physio_core::models::measurement::{Interpretation, Severity};

use crate::change;

/// Bilingual label for a severity band.
pub fn severity_label(severity: Severity) -> LocalizedText {
    match severity {
        Severity::Minimal => LocalizedText::new("Minimal impairment", "Comprometimento mínimo"),
        Severity::Mild => LocalizedText::new("Mild impairment", "Comprometimento leve"),
        Severity::Moderate => LocalizedText::new("Moderate impairment", "Comprometimento moderado"),
        Severity::Severe => LocalizedText::new("Severe impairment", "Comprometimento grave"),
    }
}

/// Band a normalized percentage where 100 is the best attainable state.
pub fn severity_for(percentage: f64) -> Severity {
    if percentage >= 75.0 {
        Severity::Minimal
    } else if percentage >= 50.0 {
        Severity::Mild
    } else if percentage >= 25.0 {
        Severity::Moderate
    } else {
        Severity::Severe
    }
}

/// Classify a score into a severity band.
///
/// The score is normalized against the definition's range and inverted for
/// lower-is-better measures, so a low pain score reads as minimal impairment.
/// Returns `None` for a degenerate range (`max == min`).
pub fn interpret_score(score: f64, definition: &MeasureDefinition) -> Option<Interpretation> {
    let mut percentage =
        change::normalized_percentage(score, definition.min_score, definition.max_score)?;
    if !definition.higher_is_better {
        percentage = 100.0 - percentage;
    }

    let severity = severity_for(percentage);
    Some(Interpretation {
        severity,
        label: severity_label(severity),
    })
}
