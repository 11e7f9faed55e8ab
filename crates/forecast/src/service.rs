//! Forecast pipeline: input → validation → projection → report → history.

use std::sync::Arc;

use salarymass_ai::{ArtifactError, ModelMetrics, ModelRegistry, Predictor};
use salarymass_core::UserId;

use crate::engine::ProjectionEngine;
use crate::error::ForecastError;
use crate::history::{HistoryEntry, HistorySink};
use crate::input::ForecastInput;
use crate::report::ForecastReport;
use crate::request::ForecastRequest;

pub struct ForecastService<P> {
    engine: ProjectionEngine<P>,
    metrics: ModelMetrics,
    history: Option<Arc<dyn HistorySink>>,
}

impl<P> core::fmt::Debug for ForecastService<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ForecastService")
            .field("metrics", &self.metrics)
            .field("history", &self.history.is_some())
            .finish_non_exhaustive()
    }
}

impl ForecastService<Arc<ModelRegistry>> {
    /// Service over the registry's model, quoting its training metrics.
    ///
    /// Loads the model eagerly so a missing artifact fails at startup.
    pub fn from_registry(registry: Arc<ModelRegistry>) -> Result<Self, ArtifactError> {
        let metrics = registry.metrics()?;
        Ok(Self::new(registry, metrics))
    }
}

impl<P: Predictor> ForecastService<P> {
    pub fn new(predictor: P, metrics: ModelMetrics) -> Self {
        Self {
            engine: ProjectionEngine::new(predictor),
            metrics,
            history: None,
        }
    }

    pub fn with_history(mut self, sink: Arc<dyn HistorySink>) -> Self {
        self.history = Some(sink);
        self
    }

    pub fn engine(&self) -> &ProjectionEngine<P> {
        &self.engine
    }

    /// Run a forecast from raw input.
    ///
    /// When `user` is set and a history sink is configured, the serialized
    /// report is recorded for that user.
    pub fn run(&self, input: ForecastInput, user: Option<UserId>) -> Result<ForecastReport, ForecastError> {
        let request = input.into_request().inspect_err(|e| {
            tracing::debug!(error = %e, "forecast input rejected");
        })?;
        self.forecast(&request, user)
    }

    pub fn forecast(&self, request: &ForecastRequest, user: Option<UserId>) -> Result<ForecastReport, ForecastError> {
        let projection = self.engine.project(request)?;
        let report = ForecastReport::new(projection, &self.metrics);

        if let (Some(user_id), Some(sink)) = (user, self.history.as_ref()) {
            let entry = HistoryEntry::new(user_id, *request, report.to_json()?);
            tracing::debug!(forecast_id = %entry.id, user_id = %user_id, "recording forecast history");
            sink.record(entry);
        }

        Ok(report)
    }
}
