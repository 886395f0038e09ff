//! Change and threshold primitives shared by progress tracking and
//! re-evaluation comparison.

use physio_core::models::comparison::ChangeDirection;

/// Below this distance between target and baseline there is no headroom to
/// measure progress against.
pub const PERCENT_EPSILON: f64 = 1e-4;

pub fn change(current: f64, baseline: f64) -> f64 {
    current - baseline
}

/// `(value - min) / (max - min) * 100`, or `None` when `max == min`.
pub fn normalized_percentage(value: f64, min: f64, max: f64) -> Option<f64> {
    if max == min {
        return None;
    }
    Some((value - min) / (max - min) * 100.0)
}

/// Classify a change by its sign, flipped when lower values are better.
pub fn direction(change: f64, higher_is_better: bool) -> ChangeDirection {
    let gain = if higher_is_better { change } else { -change };
    if gain > 0.0 {
        ChangeDirection::Improved
    } else if gain < 0.0 {
        ChangeDirection::Declined
    } else {
        ChangeDirection::Stable
    }
}

/// MCID reached in the clinically better direction. Inclusive.
pub fn directional_mcid_achieved(change: f64, mcid: f64, higher_is_better: bool) -> bool {
    if higher_is_better {
        change >= mcid
    } else {
        -change >= mcid
    }
}

/// MCID reached in either direction. Inclusive.
pub fn magnitude_mcid_achieved(change: f64, threshold: f64) -> bool {
    change.abs() >= threshold
}
