use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model artifact not found: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    #[error("failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("model artifact is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("unknown class label in model artifact: {0}")]
    UnknownLabel(String),

    #[error("feature shape mismatch: model expects {expected} features, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("model produced a non-finite probability")]
    NonFinite,
}
