use std::path::Path;

use crate::error::InferenceError;

/// A trained model that answers one feature row at a time.
pub trait Predictor: Send + Sync + Sized {
    type Output;

    /// Human-readable name used in startup logs (e.g. "triage").
    const NAME: &'static str;

    fn load(path: &Path) -> Result<Self, InferenceError>;

    fn predict(&self, row: &[f64]) -> Result<Self::Output, InferenceError>;
}

/// Why a slot could not produce a prediction.
#[derive(Debug)]
pub enum Unavailable {
    /// No artifact was loaded at startup.
    NotLoaded,
    /// The artifact is loaded but inference failed for this request.
    Failed(InferenceError),
}

/// An optionally loaded model. Read-only once constructed.
pub struct ModelSlot<M> {
    model: Option<M>,
}

impl<M: Predictor> ModelSlot<M> {
    pub fn empty() -> Self {
        Self { model: None }
    }

    pub fn loaded(model: M) -> Self {
        Self { model: Some(model) }
    }

    /// Load the artifact at `path`. A missing or unreadable artifact
    /// leaves the slot empty; the service keeps running on fallbacks.
    pub fn load(path: &Path) -> Self {
        match M::load(path) {
            Ok(model) => {
                tracing::info!(model = M::NAME, path = %path.display(), "model loaded");
                Self::loaded(model)
            }
            Err(InferenceError::ArtifactMissing { .. }) => {
                tracing::warn!(
                    model = M::NAME,
                    path = %path.display(),
                    "model artifact not found, using fallback rules"
                );
                Self::empty()
            }
            Err(e) => {
                tracing::error!(
                    model = M::NAME,
                    path = %path.display(),
                    error = %e,
                    "failed to load model artifact, using fallback rules"
                );
                Self::empty()
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn predict(&self, row: &[f64]) -> Result<M::Output, Unavailable> {
        let model = self.model.as_ref().ok_or(Unavailable::NotLoaded)?;
        model.predict(row).map_err(Unavailable::Failed)
    }
}

impl<M: Predictor> Default for ModelSlot<M> {
    fn default() -> Self {
        Self::empty()
    }
}
