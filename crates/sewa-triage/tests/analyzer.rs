use sewa_core::models::symptom::{FeatureVector, PatternTally};
use sewa_triage::analyzer::{extract, severity_score};

#[test]
fn empty_text_yields_nothing() {
    let (features, tally) = extract("");
    assert_eq!(features, FeatureVector::default());
    assert_eq!(tally, PatternTally::default());
    assert!(!features.any());
}

#[test]
fn chest_pain_phrases_set_flag_and_urgent_count() {
    for text in ["I have chest pain", "possible heart attack", "मलाई छाती दुख्छ"] {
        let (features, tally) = extract(text);
        assert!(features.chest_pain, "chest_pain not set for {text:?}");
        assert!(tally.urgent_count > 0, "no urgent match for {text:?}");
    }
}

#[test]
fn matching_ignores_case() {
    let (features, tally) = extract("SEVERE CHEST PAIN");
    assert!(features.chest_pain);
    assert!(features.severe_pain);
    assert_eq!(tally.urgent_count, 2);
}

#[test]
fn counts_every_group_independently() {
    let (features, tally) = extract("I have a high fever and a headache");
    assert_eq!(tally.urgent_count, 0);
    assert_eq!(tally.moderate_count, 2);
    assert_eq!(tally.routine_count, 0);
    assert_eq!(tally.severity_score, 2);
    assert!(features.fever);
    assert!(features.headache);
    assert!(!features.chest_pain);
}

#[test]
fn full_emergency_report() {
    let (features, tally) = extract("severe chest pain and difficulty breathing");
    assert_eq!(tally.urgent_count, 3);
    assert!(features.chest_pain);
    assert!(features.breathing_difficulty);
    assert!(features.severe_pain);
    assert!(!features.bleeding);
}

#[test]
fn routine_words_counted() {
    let (_, tally) = extract("mild cold, just a routine checkup");
    assert_eq!(tally.routine_count, 4);
    assert_eq!(tally.severity_score, 1);
}

#[test]
fn severity_modifiers_all_contribute() {
    assert_eq!(severity_score("severe and unbearable"), 4);
    assert_eq!(severity_score("slightly low"), -2);
    // substring matches count too
    assert_eq!(severity_score("highly unusual"), 2);
    assert_eq!(severity_score("nothing notable"), 0);
}

#[test]
fn model_input_order() {
    let (features, _) = extract("fever and bleeding");
    assert_eq!(features.model_input(42), [42.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
}
