//! Forecast parameter validation.
//!
//! Rules are checked in a fixed order and the first failure wins. Errors are
//! meant for end users; callers should display them rather than log them as
//! system failures.

use thiserror::Error;

pub const MIN_YEAR: i64 = 2000;
pub const MAX_YEAR: i64 = 2100;
pub const MAX_SPAN_YEARS: i64 = 20;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("start year must be between 2000 and 2100")]
    InvalidYearRange,

    #[error("end year must be after start year")]
    EndBeforeStart,

    #[error("forecast range cannot exceed 20 years")]
    RangeTooLarge,

    #[error("recruitments, departures and initial workforce cannot be negative")]
    NegativeValue,

    #[error("initial workforce cannot be zero")]
    ZeroInitialWorkforce,
}

pub fn validate(
    start_year: i64,
    end_year: i64,
    recruitments: i64,
    departures: i64,
    initial_employees: i64,
) -> Result<(), ValidationError> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&start_year) {
        return Err(ValidationError::InvalidYearRange);
    }
    if end_year <= start_year {
        return Err(ValidationError::EndBeforeStart);
    }
    if end_year - start_year > MAX_SPAN_YEARS {
        return Err(ValidationError::RangeTooLarge);
    }
    if recruitments < 0 || departures < 0 || initial_employees < 0 {
        return Err(ValidationError::NegativeValue);
    }
    if initial_employees == 0 {
        return Err(ValidationError::ZeroInitialWorkforce);
    }
    Ok(())
}
