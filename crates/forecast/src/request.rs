use serde::Serialize;

use salarymass_core::ValueObject;

use crate::validation::{self, ValidationError};

/// Validated forecast parameters.
///
/// Only obtainable through [`ForecastRequest::new`], so every instance satisfies
/// the validation rules. Recruitments and departures are annual totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ForecastRequest {
    start_year: i32,
    end_year: i32,
    annual_recruitments: u64,
    annual_departures: u64,
    initial_employees: u64,
}

impl ValueObject for ForecastRequest {}

impl ForecastRequest {
    pub fn new(
        start_year: i64,
        end_year: i64,
        recruitments: i64,
        departures: i64,
        initial_employees: i64,
    ) -> Result<Self, ValidationError> {
        validation::validate(start_year, end_year, recruitments, departures, initial_employees)?;

        // Bounds were checked above; these conversions cannot fail.
        let start_year = i32::try_from(start_year).map_err(|_| ValidationError::InvalidYearRange)?;
        let end_year = i32::try_from(end_year).map_err(|_| ValidationError::RangeTooLarge)?;

        Ok(Self {
            start_year,
            end_year,
            annual_recruitments: recruitments.unsigned_abs(),
            annual_departures: departures.unsigned_abs(),
            initial_employees: initial_employees.unsigned_abs(),
        })
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.end_year
    }

    pub fn annual_recruitments(&self) -> u64 {
        self.annual_recruitments
    }

    pub fn annual_departures(&self) -> u64 {
        self.annual_departures
    }

    pub fn initial_employees(&self) -> u64 {
        self.initial_employees
    }

    /// Projected years, ascending, bounds inclusive.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..=self.end_year
    }

    /// Number of projected years (`end - start + 1`).
    pub fn year_count(&self) -> usize {
        (self.end_year - self.start_year + 1) as usize
    }
}
