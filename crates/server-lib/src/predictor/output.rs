//! Prediction output formatting
//!
//! Converts the raw model probability into the labeled response callers
//! receive.

use crate::models::Prediction;

/// Decision boundary between the two labels
pub const PROBABILITY_THRESHOLD: f32 = 0.5;

/// Label emitted strictly above the threshold
pub const POSITIVE_LABEL: &str = "Liver Disease Detected";

/// Label emitted at or below the threshold
pub const NEGATIVE_LABEL: &str = "No Liver Disease";

/// Formats a raw probability in [0, 1] into the labeled response.
///
/// Exactly 0.5 reports no disease; only values strictly above the
/// threshold are positive. The probability is reported as a percentage
/// rounded to two decimals.
pub fn classify(probability: f32) -> Prediction {
    let clamped = probability.clamp(0.0, 1.0);
    let result = if clamped > PROBABILITY_THRESHOLD {
        POSITIVE_LABEL
    } else {
        NEGATIVE_LABEL
    };
    Prediction {
        result: result.to_string(),
        probability: to_percent(clamped),
    }
}

/// Probability as a percentage rounded to two decimal places.
fn to_percent(probability: f32) -> f64 {
    (probability as f64 * 100.0 * 100.0).round() / 100.0
}
