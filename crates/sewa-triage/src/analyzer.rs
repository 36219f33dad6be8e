use sewa_core::models::symptom::{FeatureVector, PatternTally};

use crate::patterns::{
    BLEEDING, BREATHING_DIFFICULTY, CHEST_PAIN, DIZZINESS, FEVER, HEADACHE, MODERATE_GROUP,
    NAUSEA, ROUTINE_GROUP, SEVERE_PAIN, SEVERITY_MODIFIERS, URGENT_GROUP,
};

/// Extract symptom flags and pattern-group counts from free text.
///
/// Matching is case-insensitive. Empty text yields all-false flags and a
/// zero tally.
pub fn extract(text: &str) -> (FeatureVector, PatternTally) {
    let lower = text.to_lowercase();

    let tally = PatternTally {
        urgent_count: URGENT_GROUP.count(&lower),
        moderate_count: MODERATE_GROUP.count(&lower),
        routine_count: ROUTINE_GROUP.count(&lower),
        severity_score: severity_score(&lower),
    };

    let features = FeatureVector {
        fever: FEVER.is_match(&lower),
        chest_pain: CHEST_PAIN.is_match(&lower),
        breathing_difficulty: BREATHING_DIFFICULTY.is_match(&lower),
        severe_pain: SEVERE_PAIN.is_match(&lower),
        bleeding: BLEEDING.is_match(&lower),
        headache: HEADACHE.is_match(&lower),
        nausea: NAUSEA.is_match(&lower),
        dizziness: DIZZINESS.is_match(&lower),
    };

    (features, tally)
}

/// Sum the weights of every severity modifier present in `lower`.
pub fn severity_score(lower: &str) -> i32 {
    SEVERITY_MODIFIERS
        .iter()
        .filter(|(word, _)| lower.contains(word))
        .map(|(_, weight)| weight)
        .sum()
}
