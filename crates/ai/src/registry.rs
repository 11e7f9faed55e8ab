//! Lazily loaded, process-wide model cache.

use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::artifacts::{self, ArtifactError, LoadedModel};
use crate::config::ModelConfig;
use crate::metrics::{MetricsSummary, ModelMetrics};
use crate::predictor::{FeatureVector, PredictionError, Predictor};

/// Loads model artifacts on first use and serves them read-only afterwards.
///
/// Hosts typically keep one registry per process and hand `&registry` (or an
/// `Arc` of it) to projection engines. Only `reload` ever drops the cached model.
#[derive(Debug)]
pub struct ModelRegistry {
    config: ModelConfig,
    cached: RwLock<Option<Arc<LoadedModel>>>,
}

/// Model status for health checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelHealth {
    pub model_loaded: bool,
    pub metrics: Option<MetricsSummary>,
    pub error: Option<String>,
}

impl ModelRegistry {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            cached: RwLock::new(None),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ModelConfig::from_env())
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// The cached model, loading it from disk if this is the first call.
    pub fn get(&self) -> Result<Arc<LoadedModel>, ArtifactError> {
        if let Some(model) = self
            .cached
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(model));
        }

        let mut slot = self.cached.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have loaded while we waited for the write lock.
        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }
        let model = Arc::new(artifacts::load(&self.config)?);
        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    pub fn metrics(&self) -> Result<ModelMetrics, ArtifactError> {
        Ok(self.get()?.metrics)
    }

    /// Drop the cached model; the next access reloads from disk (e.g. after retraining).
    pub fn reload(&self) {
        *self.cached.write().unwrap_or_else(PoisonError::into_inner) = None;
        tracing::info!(dir = %self.config.artifacts_dir.display(), "model cache cleared");
    }

    pub fn health(&self) -> ModelHealth {
        match self.get() {
            Ok(model) => ModelHealth {
                model_loaded: true,
                metrics: Some(model.metrics.summary()),
                error: None,
            },
            Err(e) => {
                tracing::warn!(error = %e, "model health check failed");
                ModelHealth {
                    model_loaded: false,
                    metrics: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}

impl Predictor for ModelRegistry {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        self.get()?.predict(features)
    }
}
