use thiserror::Error;

use salarymass_ai::PredictionError;

use crate::input::InputError;

/// The predictor failed while projecting one month; the whole projection is void.
#[derive(Debug, Error)]
#[error("salary prediction failed for {year}-{month:02}: {source}")]
pub struct PredictionFailure {
    pub year: i32,
    pub month: u32,
    #[source]
    pub source: PredictionError,
}

/// Failure of a full forecast run (input handling, projection, reporting).
#[derive(Debug, Error)]
pub enum ForecastError {
    /// User-correctable: missing, malformed or out-of-range parameters.
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Prediction(#[from] PredictionFailure),

    #[error("failed to serialize forecast report: {0}")]
    Report(#[from] serde_json::Error),
}

impl ForecastError {
    /// Whether the caller should show the message to the user rather than treat
    /// it as a system failure.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ForecastError::Input(_))
    }
}
