//! On-disk model artifacts.
//!
//! Layout of the artifact directory:
//! - `model.json`: feature names, scaler parameters, regression coefficients (required)
//! - `metrics.json`: `{"r2": .., "mse": ..}` from training (optional)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ModelConfig;
use crate::linear::{LinearModel, LinearPredictor};
use crate::metrics::ModelMetrics;
use crate::predictor::{FeatureVector, PredictionError, Predictor};
use crate::scaler::StandardScaler;

pub const MODEL_FILE: &str = "model.json";
pub const METRICS_FILE: &str = "metrics.json";

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("model artifact not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("feature names {found:?} do not match expected {expected:?}")]
    FeatureMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    #[error("{field} has {found} values, expected {expected}")]
    Shape {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}

impl From<ArtifactError> for PredictionError {
    fn from(err: ArtifactError) -> Self {
        match err {
            ArtifactError::FeatureMismatch { .. } => PredictionError::FeatureMismatch(err.to_string()),
            other => PredictionError::ModelUnavailable(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerArtifact {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Serialized form of the trained scaling + regression pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    pub scaler: ScalerArtifact,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    /// Check the artifact against the feature layout and build the predictor.
    pub fn into_predictor(self) -> Result<LinearPredictor, ArtifactError> {
        if self.feature_names.iter().map(String::as_str).ne(FeatureVector::NAMES) {
            return Err(ArtifactError::FeatureMismatch {
                expected: FeatureVector::NAMES.iter().map(|s| s.to_string()).collect(),
                found: self.feature_names,
            });
        }

        let mean = fixed("scaler.mean", self.scaler.mean)?;
        let scale = fixed("scaler.scale", self.scaler.scale)?;
        let coefficients = fixed("coefficients", self.coefficients)?;

        Ok(LinearPredictor::new(
            StandardScaler::new(mean, scale),
            LinearModel::new(coefficients, self.intercept),
        ))
    }
}

fn fixed(field: &'static str, values: Vec<f64>) -> Result<[f64; FeatureVector::LEN], ArtifactError> {
    let found = values.len();
    values.try_into().map_err(|_| ArtifactError::Shape {
        field,
        expected: FeatureVector::LEN,
        found,
    })
}

/// A loaded, ready-to-use model with its training metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedModel {
    pub predictor: LinearPredictor,
    pub metrics: ModelMetrics,
}

impl Predictor for LoadedModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        self.predictor.predict(features)
    }
}

/// Load model + metrics from the configured artifact directory.
pub fn load(config: &ModelConfig) -> Result<LoadedModel, ArtifactError> {
    let model_path = config.model_path();
    let artifact = read_model(&model_path)?;
    let predictor = artifact.into_predictor()?;
    let metrics = load_metrics(&config.metrics_path());

    tracing::info!(
        path = %model_path.display(),
        r2 = metrics.r2,
        mse = metrics.mse,
        "salary model loaded"
    );

    Ok(LoadedModel { predictor, metrics })
}

fn read_model(path: &Path) -> Result<ModelArtifact, ArtifactError> {
    let raw = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ArtifactError::Missing(path.to_path_buf())
        } else {
            ArtifactError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    serde_json::from_str(&raw).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Metrics are informational: a missing or broken file yields zeros.
pub fn load_metrics(path: &Path) -> ModelMetrics {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "model metrics not available; using zeros");
            return ModelMetrics::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(metrics) => metrics,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "model metrics unreadable; using zeros");
            ModelMetrics::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            feature_names: FeatureVector::NAMES.iter().map(|s| s.to_string()).collect(),
            scaler: ScalerArtifact {
                mean: vec![0.0; 5],
                scale: vec![1.0; 5],
            },
            coefficients: vec![0.0, 0.0, 0.0, 0.0, 10.0],
            intercept: 500.0,
        }
    }

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[test]
    fn loads_model_and_metrics() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MODEL_FILE, &serde_json::to_string(&artifact()).unwrap());
        write(dir.path(), METRICS_FILE, r#"{"r2": 0.91, "mse": 1520.5}"#);

        let loaded = load(&ModelConfig::new(dir.path())).unwrap();
        assert_eq!(loaded.metrics, ModelMetrics::new(0.91, 1520.5));

        let fv = FeatureVector {
            year: 2025,
            month: 1,
            nb_departures: 0.0,
            monthly_recruitment_effect: 0.0,
            nbemp: 100.0,
        };
        assert_eq!(loaded.predict(&fv).unwrap(), 1500.0);
    }

    #[test]
    fn missing_metrics_fall_back_to_zeros() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MODEL_FILE, &serde_json::to_string(&artifact()).unwrap());

        let loaded = load(&ModelConfig::new(dir.path())).unwrap();
        assert_eq!(loaded.metrics, ModelMetrics::default());
    }

    #[test]
    fn broken_metrics_fall_back_to_zeros() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), METRICS_FILE, "{not json");
        assert_eq!(load_metrics(&dir.path().join(METRICS_FILE)), ModelMetrics::default());
    }

    #[test]
    fn missing_model_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        match load(&ModelConfig::new(dir.path())) {
            Err(ArtifactError::Missing(path)) => assert!(path.ends_with(MODEL_FILE)),
            other => panic!("expected Missing, got {other:?}"),
        }
    }

    #[test]
    fn malformed_model_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), MODEL_FILE, r#"{"feature_names": []}"#);
        assert!(matches!(
            load(&ModelConfig::new(dir.path())),
            Err(ArtifactError::Parse { .. })
        ));
    }

    #[test]
    fn reordered_features_are_rejected() {
        let mut a = artifact();
        a.feature_names.swap(0, 1);
        let err = a.into_predictor().unwrap_err();
        assert!(matches!(err, ArtifactError::FeatureMismatch { .. }));
        assert!(matches!(
            PredictionError::from(err),
            PredictionError::FeatureMismatch(_)
        ));
    }

    #[test]
    fn wrong_coefficient_count_is_a_shape_error() {
        let mut a = artifact();
        a.coefficients.pop();
        match a.into_predictor() {
            Err(ArtifactError::Shape { field, expected, found }) => {
                assert_eq!(field, "coefficients");
                assert_eq!(expected, 5);
                assert_eq!(found, 4);
            }
            other => panic!("expected Shape, got {other:?}"),
        }
    }
}
