//! sewa-triage
//!
//! Rule-based symptom triage. Pure functions over text — no model
//! dependency. Covers symptom extraction, the fallback urgency rule,
//! English/Nepali language detection and the Nepali medical lexicon.

pub mod analyzer;
pub mod language;
pub mod patterns;
pub mod rules;
pub mod translate;

pub use analyzer::extract;
pub use language::detect;
pub use rules::decide;
pub use translate::translate;
