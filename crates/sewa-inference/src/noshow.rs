use std::path::Path;

use sewa_core::models::noshow::RiskProbability;

use crate::artifact::LinearArtifact;
use crate::error::InferenceError;
use crate::slot::Predictor;

/// Confidence reported for every trained no-show prediction.
pub const NOSHOW_MODEL_CONFIDENCE: f64 = 0.85;

/// Binary no-show classifier over
/// `[age, distance, history_missed, weather_bad, day_of_week, time_of_day, reliability_score]`.
///
/// `classes[1]` is the "missed" outcome.
#[derive(Debug)]
pub struct NoShowModel {
    artifact: LinearArtifact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoShowPrediction {
    pub risk: RiskProbability,
    pub confidence: f64,
}

impl NoShowModel {
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, InferenceError> {
        artifact.validate()?;
        if artifact.classes.len() != 2 {
            return Err(InferenceError::InvalidArtifact(format!(
                "no-show model must have 2 classes, got {}",
                artifact.classes.len()
            )));
        }
        Ok(Self { artifact })
    }
}

impl Predictor for NoShowModel {
    type Output = NoShowPrediction;

    const NAME: &'static str = "noshow";

    fn load(path: &Path) -> Result<Self, InferenceError> {
        Self::from_artifact(LinearArtifact::load(path)?)
    }

    fn predict(&self, row: &[f64]) -> Result<NoShowPrediction, InferenceError> {
        let proba = self.artifact.predict_proba(row)?;
        Ok(NoShowPrediction {
            risk: RiskProbability::new(proba[1]),
            confidence: NOSHOW_MODEL_CONFIDENCE,
        })
    }
}
