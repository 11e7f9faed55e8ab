use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input of a salary-mass prediction for one month.
///
/// Field names on the wire are fixed by the trained model and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Month")]
    pub month: u32,
    pub nb_departures: f64,
    pub monthly_recruitment_effect: f64,
    pub nbemp: f64,
}

impl FeatureVector {
    /// Number of model features.
    pub const LEN: usize = 5;

    /// Canonical feature order expected by scalers and models.
    pub const NAMES: [&'static str; Self::LEN] = [
        "Year",
        "Month",
        "nb_departures",
        "monthly_recruitment_effect",
        "nbemp",
    ];

    /// Features as a dense row in [`FeatureVector::NAMES`] order.
    pub fn to_array(&self) -> [f64; Self::LEN] {
        [
            f64::from(self.year),
            f64::from(self.month),
            self.nb_departures,
            self.monthly_recruitment_effect,
            self.nbemp,
        ]
    }
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("feature mismatch: {0}")]
    FeatureMismatch(String),

    #[error("model produced a non-finite prediction ({0})")]
    NonFinite(f64),

    #[error("inference failed: {0}")]
    Inference(String),
}

/// Salary-mass estimator consumed by the projection engine.
///
/// Implementations must be deterministic and side-effect free for a given
/// feature vector. How features are scaled or which regression backs the
/// estimate is left to the implementation.
pub trait Predictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;
}

impl<P: Predictor + ?Sized> Predictor for &P {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }
}

impl<P: Predictor + ?Sized> Predictor for Arc<P> {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }
}

impl<P: Predictor + ?Sized> Predictor for Box<P> {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (**self).predict(features)
    }
}

/// Predictor backed by a closure. Built with [`from_fn`].
#[derive(Clone)]
pub struct FnPredictor<F> {
    f: F,
}

impl<F> core::fmt::Debug for FnPredictor<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnPredictor").finish_non_exhaustive()
    }
}

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(&FeatureVector) -> Result<f64, PredictionError> + Send + Sync,
{
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        (self.f)(features)
    }
}

/// Wrap a closure as a [`Predictor`] (stub models, tests, remote adapters).
pub fn from_fn<F>(f: F) -> FnPredictor<F>
where
    F: Fn(&FeatureVector) -> Result<f64, PredictionError> + Send + Sync,
{
    FnPredictor { f }
}
