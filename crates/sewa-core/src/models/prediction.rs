use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which path produced a prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ModelUsed {
    /// A trained model artifact answered the request.
    Enhanced,
    /// The rule-based fallback answered the request.
    Fallback,
}

/// Round to a fixed number of decimal places for response bodies.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
