use serde::{Deserialize, Serialize};

use crate::predictor::FeatureVector;

/// Per-feature standardization: `(x - mean) / scale`.
///
/// A zero scale (constant feature during training) divides by one instead,
/// matching how the model was fitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: [f64; FeatureVector::LEN],
    pub scale: [f64; FeatureVector::LEN],
}

impl StandardScaler {
    pub fn new(mean: [f64; FeatureVector::LEN], scale: [f64; FeatureVector::LEN]) -> Self {
        Self { mean, scale }
    }

    /// Scaler that leaves features untouched.
    pub fn identity() -> Self {
        Self {
            mean: [0.0; FeatureVector::LEN],
            scale: [1.0; FeatureVector::LEN],
        }
    }

    pub fn transform(&self, row: [f64; FeatureVector::LEN]) -> [f64; FeatureVector::LEN] {
        let mut out = [0.0; FeatureVector::LEN];
        for (i, x) in row.iter().enumerate() {
            let scale = if self.scale[i] == 0.0 { 1.0 } else { self.scale[i] };
            out[i] = (x - self.mean[i]) / scale;
        }
        out
    }
}
