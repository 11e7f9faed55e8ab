use serde::{Deserialize, Serialize};

/// Held-out evaluation metrics recorded when the model was trained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub r2: f64,
    pub mse: f64,
}

/// Metrics as quoted to end users.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub r2_score: f64,
    pub mse: f64,
}

impl ModelMetrics {
    pub fn new(r2: f64, mse: f64) -> Self {
        Self { r2, mse }
    }

    /// R² to 4 decimals, MSE to 2.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            r2_score: round_to(self.r2, 4),
            mse: round_to(self.mse, 2),
        }
    }
}

/// Rounds the exact decimal value of `x` (ties to even), as float formatting does.
fn round_to(x: f64, decimals: usize) -> f64 {
    format!("{x:.decimals$}").parse().unwrap_or(x)
}
