//! Raw inbound forecast parameters.
//!
//! Hosts receive `{start_year, end_year, recruitments, departures,
//! initial_employees}` from forms or JSON bodies. Any field may be absent, and
//! numbers may arrive as strings.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::request::ForecastRequest;
use crate::validation::ValidationError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("invalid numeric values: {0}")]
    Malformed(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastInput {
    #[serde(default, deserialize_with = "lenient_int")]
    pub start_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub end_year: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub recruitments: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub departures: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub initial_employees: Option<i64>,
}

impl ForecastInput {
    pub fn new(
        start_year: i64,
        end_year: i64,
        recruitments: i64,
        departures: i64,
        initial_employees: i64,
    ) -> Self {
        Self {
            start_year: Some(start_year),
            end_year: Some(end_year),
            recruitments: Some(recruitments),
            departures: Some(departures),
            initial_employees: Some(initial_employees),
        }
    }

    pub fn from_json(body: &str) -> Result<Self, InputError> {
        serde_json::from_str(body).map_err(|e| InputError::Malformed(e.to_string()))
    }

    /// Names of absent fields, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("start_year", self.start_year),
            ("end_year", self.end_year),
            ("recruitments", self.recruitments),
            ("departures", self.departures),
            ("initial_employees", self.initial_employees),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.is_none().then_some(name))
        .collect()
    }

    /// Check presence of every field, then the validation rules.
    pub fn into_request(self) -> Result<ForecastRequest, InputError> {
        match (
            self.start_year,
            self.end_year,
            self.recruitments,
            self.departures,
            self.initial_employees,
        ) {
            (Some(start), Some(end), Some(rec), Some(dep), Some(initial)) => {
                Ok(ForecastRequest::new(start, end, rec, dep, initial)?)
            }
            _ => Err(InputError::MissingFields(self.missing_fields())),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrText {
    Int(i64),
    Text(String),
}

/// Accept `2025` or `"2025"`; `null` counts as absent.
fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrText>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrText::Int(v)) => Ok(Some(v)),
        Some(IntOrText::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not an integer: {s:?}"))),
    }
}
