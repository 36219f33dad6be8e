use sewa_core::models::symptom::{FeatureVector, PatternTally};
use sewa_core::models::urgency::UrgencyLabel;

use crate::analyzer::extract;

/// Rule-based urgency used when no triage model is available.
pub fn decide(text: &str, age: u32) -> UrgencyLabel {
    let (features, tally) = extract(text);
    decide_from(&features, &tally, age)
}

/// Same rule as [`decide`] over an already extracted report.
///
/// Pattern-group evidence wins; age only matters when no group matched.
pub fn decide_from(features: &FeatureVector, tally: &PatternTally, age: u32) -> UrgencyLabel {
    if tally.urgent_count > 0 || tally.severity_score >= 2 {
        return UrgencyLabel::Urgent;
    }
    if tally.moderate_count > 0 || tally.severity_score >= 1 {
        return UrgencyLabel::Moderate;
    }
    if tally.routine_count > 0 {
        return UrgencyLabel::Routine;
    }

    if age > 65 && (features.fever || features.chest_pain) {
        return UrgencyLabel::Moderate;
    }
    if age > 75 && features.any() {
        return UrgencyLabel::Moderate;
    }

    UrgencyLabel::Routine
}

/// Plain keyword rule behind `POST /triage`: English substrings only.
pub fn keyword_triage(text: &str) -> UrgencyLabel {
    let lower = text.to_lowercase();
    if lower.contains("chest pain") {
        UrgencyLabel::Urgent
    } else if lower.contains("fever") {
        UrgencyLabel::Moderate
    } else {
        UrgencyLabel::Routine
    }
}

/// Rule for callers that send boolean flags instead of text.
pub fn flag_triage(fever: bool, chest_pain: bool) -> UrgencyLabel {
    if chest_pain {
        UrgencyLabel::Urgent
    } else if fever {
        UrgencyLabel::Moderate
    } else {
        UrgencyLabel::Routine
    }
}
