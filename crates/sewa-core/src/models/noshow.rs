use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::prediction::round_to;

/// Kind of appointment being predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AppointmentType {
    #[default]
    Routine,
    FollowUp,
    Urgent,
}

impl AppointmentType {
    /// Lenient label lookup; anything unrecognised is treated as routine.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().replace('-', "_").as_str() {
            "urgent" => AppointmentType::Urgent,
            "follow_up" | "followup" => AppointmentType::FollowUp,
            _ => AppointmentType::Routine,
        }
    }
}

/// Attributes of a booked appointment used to estimate no-show risk.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NoShowContext {
    pub age: u32,
    pub distance_km: f64,
    pub history_missed: u32,
    pub weather_bad: bool,
    /// 0 = Monday .. 6 = Sunday.
    pub day_of_week: u8,
    /// 0 = morning, 1 = afternoon, 2 = evening.
    pub time_of_day: u8,
    pub appointment_type: AppointmentType,
}

impl Default for NoShowContext {
    fn default() -> Self {
        Self {
            age: 30,
            distance_km: 5.0,
            history_missed: 0,
            weather_bad: false,
            day_of_week: 1,
            time_of_day: 1,
            appointment_type: AppointmentType::Routine,
        }
    }
}

impl NoShowContext {
    /// Number of values in [`NoShowContext::model_input`].
    pub const MODEL_WIDTH: usize = 7;

    pub fn reliability_score(&self) -> f64 {
        reliability_score(self.history_missed)
    }

    /// Numeric row fed to a trained no-show model:
    /// `[age, distance, history_missed, weather_bad, day_of_week, time_of_day, reliability_score]`.
    pub fn model_input(&self) -> [f64; Self::MODEL_WIDTH] {
        [
            f64::from(self.age),
            self.distance_km,
            f64::from(self.history_missed),
            if self.weather_bad { 1.0 } else { 0.0 },
            f64::from(self.day_of_week),
            f64::from(self.time_of_day),
            self.reliability_score(),
        ]
    }
}

/// `max(0, 1 - 0.2 * missed)`; always within `[0, 1]`.
pub fn reliability_score(history_missed: u32) -> f64 {
    (1.0 - f64::from(history_missed) * 0.2).max(0.0)
}

/// A no-show probability, clamped to `[0, 1]` and rounded to 3 places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RiskProbability(f64);

impl RiskProbability {
    pub fn new(raw: f64) -> Self {
        let clamped = if raw.is_nan() { 0.0 } else { raw.clamp(0.0, 1.0) };
        Self(round_to(clamped, 3))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    High,
}

impl RiskLevel {
    pub fn from_flag(high: bool) -> Self {
        if high { RiskLevel::High } else { RiskLevel::Low }
    }
}

/// Per-factor breakdown returned alongside a no-show estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactors {
    pub distance_risk: RiskLevel,
    pub history_risk: RiskLevel,
    pub weather_risk: RiskLevel,
    pub reliability_score: f64,
}
