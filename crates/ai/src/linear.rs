use serde::{Deserialize, Serialize};

use crate::predictor::{FeatureVector, PredictionError, Predictor};
use crate::scaler::StandardScaler;

/// Ordinary least-squares regression over standardized features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: [f64; FeatureVector::LEN],
    pub intercept: f64,
}

impl LinearModel {
    pub fn new(coefficients: [f64; FeatureVector::LEN], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn evaluate(&self, scaled: &[f64; FeatureVector::LEN]) -> f64 {
        self.coefficients
            .iter()
            .zip(scaled.iter())
            .map(|(c, x)| c * x)
            .sum::<f64>()
            + self.intercept
    }
}

/// Scaling step + regression model, the pipeline the forecast model was trained with.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    scaler: StandardScaler,
    model: LinearModel,
}

impl LinearPredictor {
    pub fn new(scaler: StandardScaler, model: LinearModel) -> Self {
        Self { scaler, model }
    }

    pub fn scaler(&self) -> &StandardScaler {
        &self.scaler
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }
}

impl Predictor for LinearPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        let scaled = self.scaler.transform(features.to_array());
        let y = self.model.evaluate(&scaled);
        if !y.is_finite() {
            return Err(PredictionError::NonFinite(y));
        }
        Ok(y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(nbemp: f64) -> FeatureVector {
        FeatureVector {
            year: 2025,
            month: 1,
            nb_departures: 5.0,
            monthly_recruitment_effect: 10.0,
            nbemp,
        }
    }

    #[test]
    fn scales_then_applies_coefficients() {
        let scaler = StandardScaler::new([2025.0, 1.0, 5.0, 10.0, 1000.0], [1.0, 1.0, 1.0, 1.0, 100.0]);
        let model = LinearModel::new([0.0, 0.0, 0.0, 0.0, 500.0], 40_000.0);
        let p = LinearPredictor::new(scaler, model);

        assert_eq!(p.predict(&features(1000.0)).unwrap(), 40_000.0);
        assert_eq!(p.predict(&features(1200.0)).unwrap(), 41_000.0);
    }

    #[test]
    fn non_finite_output_is_an_error() {
        let model = LinearModel::new([f64::INFINITY, 0.0, 0.0, 0.0, 0.0], 0.0);
        let p = LinearPredictor::new(StandardScaler::identity(), model);
        assert!(matches!(
            p.predict(&features(1.0)),
            Err(PredictionError::NonFinite(_))
        ));
    }
}
