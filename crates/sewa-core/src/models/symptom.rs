use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A free-text symptom description with the patient's age.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SymptomReport {
    pub raw_text: String,
    pub age: u32,
}

/// Presence flags for the symptoms the analyzer recognises.
///
/// Flags are independent; several may be set by the same phrase
/// (e.g. "severe bleeding" sets both `severe_pain` and `bleeding`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FeatureVector {
    pub fever: bool,
    pub chest_pain: bool,
    pub breathing_difficulty: bool,
    pub severe_pain: bool,
    pub bleeding: bool,
    pub headache: bool,
    pub nausea: bool,
    pub dizziness: bool,
}

impl FeatureVector {
    /// Number of values in [`FeatureVector::model_input`].
    pub const MODEL_WIDTH: usize = 6;

    pub fn any(&self) -> bool {
        self.fever
            || self.chest_pain
            || self.breathing_difficulty
            || self.severe_pain
            || self.bleeding
            || self.headache
            || self.nausea
            || self.dizziness
    }

    /// Numeric row fed to a trained triage model:
    /// `[age, fever, chest_pain, breathing_difficulty, severe_pain, bleeding]`.
    pub fn model_input(&self, age: u32) -> [f64; Self::MODEL_WIDTH] {
        [
            f64::from(age),
            flag(self.fever),
            flag(self.chest_pain),
            flag(self.breathing_difficulty),
            flag(self.severe_pain),
            flag(self.bleeding),
        ]
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

/// Aggregate pattern-group counts for a piece of symptom text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatternTally {
    pub urgent_count: u32,
    pub moderate_count: u32,
    pub routine_count: u32,
    /// Sum of severity-modifier weights; negative when only
    /// low-severity words appear.
    pub severity_score: i32,
}
