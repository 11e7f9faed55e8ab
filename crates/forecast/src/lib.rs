//! Salary-mass forecasting.
//!
//! Given a starting workforce, an annual hiring/attrition plan and an injected
//! [`salarymass_ai::Predictor`], produces a month-by-month and year-by-year
//! projection of total payroll cost. Deterministic domain logic only: model
//! loading lives in `salarymass-ai`, rendering and storage in the host.

pub mod engine;
pub mod error;
pub mod history;
pub mod input;
pub mod records;
pub mod report;
pub mod request;
pub mod service;
pub mod validation;

pub use engine::{ProjectionEngine, project};
pub use error::{ForecastError, PredictionFailure};
pub use history::{HistoryEntry, HistorySink, InMemoryHistorySink};
pub use input::{ForecastInput, InputError};
pub use records::{MonthlyRecord, Projection, YearlyRecord};
pub use report::ForecastReport;
pub use request::ForecastRequest;
pub use service::ForecastService;
pub use validation::{ValidationError, validate};
