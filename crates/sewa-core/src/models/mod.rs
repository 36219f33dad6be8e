pub mod language;
pub mod noshow;
pub mod prediction;
pub mod symptom;
pub mod urgency;
