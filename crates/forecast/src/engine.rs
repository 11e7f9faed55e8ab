//! Month-by-month salary-mass projection.
//!
//! Model:
//! - Headcount starts at the initial workforce and is carried from one year to
//!   the next.
//! - Inside a year, annual recruitments/departures are spread evenly over the
//!   12 months to interpolate the headcount fed to the predictor (minimum 1).
//! - The year-end headcount uses the full annual delta from the year's starting
//!   headcount, never from the month-12 interpolation.
//! - Yearly totals sum unrounded monthly predictions and are rounded once.

use salarymass_ai::{FeatureVector, PredictionError, Predictor};

use crate::error::PredictionFailure;
use crate::records::{MonthlyRecord, Projection, YearlyRecord};
use crate::request::ForecastRequest;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Projection engine over an injected salary-mass predictor.
///
/// Stateless across calls: every [`ProjectionEngine::project`] starts from the
/// request alone, so one engine can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct ProjectionEngine<P> {
    predictor: P,
}

impl<P: Predictor> ProjectionEngine<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    pub fn project(&self, request: &ForecastRequest) -> Result<Projection, PredictionFailure> {
        project(request, &self.predictor)
    }
}

/// Run the projection for `request`, calling `predictor` once per month.
///
/// Any predictor failure aborts the run; no partial projection is returned.
pub fn project<P>(request: &ForecastRequest, predictor: &P) -> Result<Projection, PredictionFailure>
where
    P: Predictor + ?Sized,
{
    let months = request.year_count() * MONTHS_PER_YEAR as usize;
    let mut monthly = Vec::with_capacity(months);
    let mut yearly = Vec::with_capacity(request.year_count());

    let annual_recruitments = request.annual_recruitments() as f64;
    let annual_departures = request.annual_departures() as f64;
    let monthly_recruitment = annual_recruitments / f64::from(MONTHS_PER_YEAR);
    let monthly_departures = annual_departures / f64::from(MONTHS_PER_YEAR);

    let mut current_employees = request.initial_employees() as f64;

    for year in request.years() {
        let year_start_employees = current_employees;
        let mut yearly_salary = 0.0;

        for month in 1..=MONTHS_PER_YEAR {
            let elapsed = f64::from(month - 1);
            let month_employees = (year_start_employees + monthly_recruitment * elapsed
                - monthly_departures * elapsed)
                .max(1.0);

            let features = FeatureVector {
                year,
                month,
                nb_departures: monthly_departures,
                monthly_recruitment_effect: monthly_recruitment,
                nbemp: month_employees,
            };

            let prediction = predict_month(predictor, &features)?.max(0.0);
            yearly_salary += prediction;

            tracing::debug!(year, month, employees = month_employees, prediction, "projected month");
            monthly.push(MonthlyRecord::new(year, month, prediction, month_employees));
        }

        let end_year_employees =
            (year_start_employees + annual_recruitments - annual_departures).max(0.0);
        let record = YearlyRecord::new(year, yearly_salary, end_year_employees);

        tracing::info!(
            year,
            total_salary_mass = record.total_salary_mass,
            end_of_year_employees = record.end_of_year_employees,
            "projected year"
        );
        yearly.push(record);

        current_employees = end_year_employees;
    }

    Ok(Projection { monthly, yearly })
}

fn predict_month<P>(predictor: &P, features: &FeatureVector) -> Result<f64, PredictionFailure>
where
    P: Predictor + ?Sized,
{
    let fail = |source: PredictionError| {
        tracing::warn!(year = features.year, month = features.month, error = %source, "salary prediction failed");
        PredictionFailure {
            year: features.year,
            month: features.month,
            source,
        }
    };

    let raw = predictor.predict(features).map_err(fail)?;
    if !raw.is_finite() {
        return Err(fail(PredictionError::NonFinite(raw)));
    }
    Ok(raw)
}
