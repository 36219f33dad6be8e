use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::InferenceError;

/// Per-feature standardisation applied before the linear model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// A logistic-regression classifier exported from the training pipeline.
///
/// Binary models carry a single coefficient row scoring `classes[1]`;
/// multi-class models carry one row per class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub classes: Vec<String>,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
    pub coefficients: Vec<Vec<f64>>,
    pub intercepts: Vec<f64>,
}

impl LinearArtifact {
    /// Read and validate an artifact from `path`.
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => InferenceError::ArtifactMissing {
                path: path.to_path_buf(),
            },
            _ => InferenceError::Io(e),
        })?;
        let artifact: LinearArtifact = serde_json::from_str(&contents)?;
        artifact.validate()?;
        Ok(artifact)
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.first().map_or(0, Vec::len)
    }

    pub fn is_binary(&self) -> bool {
        self.classes.len() == 2 && self.coefficients.len() == 1
    }

    pub fn validate(&self) -> Result<(), InferenceError> {
        let invalid = |msg: String| -> Result<(), InferenceError> {
            Err(InferenceError::InvalidArtifact(msg))
        };

        if self.classes.len() < 2 {
            return invalid(format!("need at least 2 classes, got {}", self.classes.len()));
        }
        let rows = self.coefficients.len();
        if !(self.is_binary() || rows == self.classes.len()) {
            return invalid(format!(
                "{} coefficient rows do not fit {} classes",
                rows,
                self.classes.len()
            ));
        }
        if self.intercepts.len() != rows {
            return invalid(format!(
                "{} intercepts for {} coefficient rows",
                self.intercepts.len(),
                rows
            ));
        }

        let width = self.n_features();
        if width == 0 {
            return invalid("coefficient rows are empty".to_string());
        }
        if self.coefficients.iter().any(|row| row.len() != width) {
            return invalid("coefficient rows differ in length".to_string());
        }
        if !self.feature_names.is_empty() && self.feature_names.len() != width {
            return invalid(format!(
                "{} feature names for {} coefficients",
                self.feature_names.len(),
                width
            ));
        }
        if let Some(scaler) = &self.scaler
            && (scaler.mean.len() != width || scaler.scale.len() != width)
        {
            return invalid("scaler does not match coefficient width".to_string());
        }

        let all_finite = self
            .coefficients
            .iter()
            .flatten()
            .chain(&self.intercepts)
            .chain(self.scaler.iter().flat_map(|s| s.mean.iter().chain(&s.scale)))
            .all(|v| v.is_finite());
        if !all_finite {
            return invalid("artifact contains non-finite parameters".to_string());
        }

        Ok(())
    }

    /// Class probabilities for one feature row, in `classes` order.
    pub fn predict_proba(&self, row: &[f64]) -> Result<Vec<f64>, InferenceError> {
        let expected = self.n_features();
        if row.len() != expected {
            return Err(InferenceError::ShapeMismatch {
                expected,
                actual: row.len(),
            });
        }

        let scaled: Vec<f64> = match &self.scaler {
            Some(scaler) => row
                .iter()
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|(x, (mean, scale))| {
                    // zero-variance features are left centred but unscaled
                    let scale = if *scale == 0.0 { 1.0 } else { *scale };
                    (x - mean) / scale
                })
                .collect(),
            None => row.to_vec(),
        };

        let logits: Vec<f64> = self
            .coefficients
            .iter()
            .zip(&self.intercepts)
            .map(|(weights, bias)| {
                weights.iter().zip(&scaled).map(|(w, x)| w * x).sum::<f64>() + bias
            })
            .collect();

        let proba = if self.is_binary() {
            let p = sigmoid(logits[0]);
            vec![1.0 - p, p]
        } else {
            softmax(&logits)
        };

        if proba.iter().all(|p| p.is_finite()) {
            Ok(proba)
        } else {
            Err(InferenceError::NonFinite)
        }
    }

    /// Index and probability of the most likely class.
    pub fn predict(&self, row: &[f64]) -> Result<(usize, f64), InferenceError> {
        let proba = self.predict_proba(row)?;
        proba
            .iter()
            .copied()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .ok_or(InferenceError::NonFinite)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|z| (z - max).exp()).collect();
    let total: f64 = exps.iter().sum();
    exps.into_iter().map(|e| e / total).collect()
}
