//! `salarymass-ai`
//!
//! **Responsibility:** the salary-mass model boundary.
//!
//! This crate is intentionally **not** part of the forecasting loop:
//! - It knows nothing about workforce projection or validation rules.
//! - It exposes the [`Predictor`] capability the projection engine consumes.
//! - It ships one concrete predictor (standard scaling + linear regression) loaded
//!   from on-disk artifacts and cached by [`ModelRegistry`].

pub mod artifacts;
pub mod config;
pub mod linear;
pub mod metrics;
pub mod predictor;
pub mod registry;
pub mod scaler;

pub use artifacts::{ArtifactError, LoadedModel, ModelArtifact};
pub use config::ModelConfig;
pub use linear::{LinearModel, LinearPredictor};
pub use metrics::{MetricsSummary, ModelMetrics};
pub use predictor::{FeatureVector, FnPredictor, PredictionError, Predictor, from_fn};
pub use registry::{ModelHealth, ModelRegistry};
pub use scaler::StandardScaler;
