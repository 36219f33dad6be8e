//! sewa-noshow
//!
//! Rule-based no-show risk estimate used when no trained model is loaded.

use sewa_core::models::noshow::{AppointmentType, NoShowContext, RiskFactors, RiskLevel, RiskProbability};
use sewa_core::models::prediction::round_to;

/// Share of appointments missed with no risk factors present.
pub const BASE_RATE: f64 = 0.15;

/// Distance in km beyond which travel counts as a risk factor.
pub const FAR_DISTANCE_KM: f64 = 15.0;

/// Missed appointments beyond which history counts as a risk factor.
pub const MISSED_HISTORY_LIMIT: u32 = 3;

const SUNDAY: u8 = 6;
const EVENING: u8 = 2;

/// Estimate the probability that the appointment in `ctx` is missed.
///
/// Each adjustment applies independently; the sum is clamped to `[0, 1]`
/// and rounded to three places.
pub fn estimate(ctx: &NoShowContext) -> RiskProbability {
    let mut risk = BASE_RATE;

    if ctx.distance_km > FAR_DISTANCE_KM {
        risk += 0.10;
    }
    if ctx.history_missed > MISSED_HISTORY_LIMIT {
        risk += 0.20;
    }
    if ctx.weather_bad {
        risk += 0.10;
    }
    if ctx.day_of_week == SUNDAY {
        risk += 0.05;
    }
    if ctx.time_of_day == EVENING {
        risk += 0.05;
    }
    if ctx.age > 70 {
        risk += 0.05;
    }

    // protective
    if ctx.appointment_type == AppointmentType::Urgent {
        risk -= 0.10;
    }
    if ctx.reliability_score() > 0.8 {
        risk -= 0.05;
    }

    RiskProbability::new(risk)
}

/// Per-factor breakdown reported next to the estimate, whichever path
/// produced it.
pub fn risk_factors(ctx: &NoShowContext) -> RiskFactors {
    RiskFactors {
        distance_risk: RiskLevel::from_flag(ctx.distance_km > FAR_DISTANCE_KM),
        history_risk: RiskLevel::from_flag(ctx.history_missed > MISSED_HISTORY_LIMIT),
        weather_risk: RiskLevel::from_flag(ctx.weather_bad),
        reliability_score: round_to(ctx.reliability_score(), 2),
    }
}
