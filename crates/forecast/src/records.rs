//! Projection output rows.

use chrono::Month;
use serde::{Deserialize, Serialize};

use salarymass_core::ValueObject;

/// One projected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    /// Rounded to 2 decimals, never negative.
    pub predicted_salary_mass: f64,
    /// Interpolated headcount, rounded, at least 1.
    pub employee_count_estimate: u64,
}

/// Totals for one projected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyRecord {
    pub year: i32,
    /// Sum of the year's unrounded monthly predictions, rounded to 2 decimals.
    pub total_salary_mass: f64,
    pub end_of_year_employees: u64,
}

impl ValueObject for MonthlyRecord {}
impl ValueObject for YearlyRecord {}

impl MonthlyRecord {
    pub fn new(year: i32, month: u32, salary_mass: f64, employees: f64) -> Self {
        Self {
            year,
            month,
            month_name: month_name(month).to_string(),
            predicted_salary_mass: round2(salary_mass),
            employee_count_estimate: round_count(employees),
        }
    }
}

impl YearlyRecord {
    pub fn new(year: i32, salary_mass: f64, employees: f64) -> Self {
        Self {
            year,
            total_salary_mass: round2(salary_mass),
            end_of_year_employees: round_count(employees),
        }
    }
}

/// Complete projection: 12 monthly rows per year plus one yearly row per year,
/// both ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub monthly: Vec<MonthlyRecord>,
    pub yearly: Vec<YearlyRecord>,
}

impl Projection {
    pub fn months_of(&self, year: i32) -> impl Iterator<Item = &MonthlyRecord> {
        self.monthly.iter().filter(move |m| m.year == year)
    }

    pub fn year(&self, year: i32) -> Option<&YearlyRecord> {
        self.yearly.iter().find(|y| y.year == year)
    }
}

/// English month name for 1-12, empty otherwise.
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("", |m| m.name())
}

/// Round to 2 decimals from the exact decimal value of `x`.
///
/// Float formatting is exact, so only true ties go to even; scaling by 100
/// first would manufacture ties the stored value does not have.
pub fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}

/// Round half to even to a non-negative count.
pub fn round_count(x: f64) -> u64 {
    x.max(0.0).round_ties_even() as u64
}
