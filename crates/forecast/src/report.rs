use serde::{Deserialize, Serialize};

use salarymass_ai::{MetricsSummary, ModelMetrics};

use crate::records::{MonthlyRecord, Projection, YearlyRecord};

pub const STATUS_SUCCESS: &str = "success";

/// Successful forecast as handed to renderers and history stores.
///
/// `predictions` holds the yearly rows, `monthly` the detail rows a chart
/// renderer plots in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub status: String,
    pub predictions: Vec<YearlyRecord>,
    pub monthly: Vec<MonthlyRecord>,
    pub metrics: MetricsSummary,
}

impl ForecastReport {
    pub fn new(projection: Projection, metrics: &ModelMetrics) -> Self {
        Self {
            status: STATUS_SUCCESS.to_string(),
            predictions: projection.yearly,
            monthly: projection.monthly,
            metrics: metrics.summary(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
