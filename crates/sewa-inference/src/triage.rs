use std::path::Path;

use sewa_core::models::urgency::UrgencyLabel;

use crate::artifact::LinearArtifact;
use crate::error::InferenceError;
use crate::slot::Predictor;

/// Urgency classifier over
/// `[age, fever, chest_pain, breathing_difficulty, severe_pain, bleeding]`.
#[derive(Debug)]
pub struct TriageModel {
    artifact: LinearArtifact,
    labels: Vec<UrgencyLabel>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriagePrediction {
    pub urgency: UrgencyLabel,
    /// Probability of the predicted class.
    pub confidence: f64,
}

impl TriageModel {
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, InferenceError> {
        artifact.validate()?;
        let labels = artifact
            .classes
            .iter()
            .map(|class| {
                class
                    .parse::<UrgencyLabel>()
                    .map_err(|_| InferenceError::UnknownLabel(class.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { artifact, labels })
    }
}

impl Predictor for TriageModel {
    type Output = TriagePrediction;

    const NAME: &'static str = "triage";

    fn load(path: &Path) -> Result<Self, InferenceError> {
        Self::from_artifact(LinearArtifact::load(path)?)
    }

    fn predict(&self, row: &[f64]) -> Result<TriagePrediction, InferenceError> {
        let (index, confidence) = self.artifact.predict(row)?;
        Ok(TriagePrediction {
            urgency: self.labels[index],
            confidence,
        })
    }
}
