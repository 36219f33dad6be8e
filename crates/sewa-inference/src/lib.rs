//! sewa-inference
//!
//! Loading and invoking trained model artifacts. Models are opaque
//! linear classifiers stored as JSON; callers get either a prediction or
//! an [`Unavailable`](slot::Unavailable) and pick their own fallback.

pub mod artifact;
pub mod error;
pub mod noshow;
pub mod registry;
pub mod slot;
pub mod triage;

pub use registry::Models;
pub use slot::{ModelSlot, Predictor, Unavailable};
