//! End-to-end: artifacts on disk → registry → service → report + history.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use salarymass_ai::{FeatureVector, ModelConfig, ModelRegistry, from_fn};
use salarymass_core::UserId;
use salarymass_forecast::{
    ForecastError, ForecastInput, ForecastReport, ForecastRequest, ForecastService, InMemoryHistorySink,
    InputError, project,
};

/// salary mass = 40 * headcount + 2000, expressed through a scaler and a linear model.
fn write_artifacts(dir: &Path) -> Result<()> {
    let model = serde_json::json!({
        "feature_names": ["Year", "Month", "nb_departures", "monthly_recruitment_effect", "nbemp"],
        "scaler": {
            "mean": [2025.0, 6.5, 0.0, 0.0, 1000.0],
            "scale": [1.0, 1.0, 1.0, 1.0, 10.0]
        },
        "coefficients": [0.0, 0.0, 0.0, 0.0, 400.0],
        "intercept": 42000.0
    });
    std::fs::write(dir.join("model.json"), model.to_string())?;
    std::fs::write(dir.join("metrics.json"), r#"{"r2": 0.95512, "mse": 1234.567}"#)?;
    Ok(())
}

#[test]
fn projects_with_model_loaded_from_disk() -> Result<()> {
    salarymass_observability::init();
    let dir = tempfile::tempdir()?;
    write_artifacts(dir.path())?;

    let registry = Arc::new(ModelRegistry::new(ModelConfig::new(dir.path())));
    let sink = Arc::new(InMemoryHistorySink::new());
    let service = ForecastService::from_registry(registry.clone())?.with_history(sink.clone());

    let body = r#"{"start_year": 2025, "end_year": 2026, "recruitments": 120, "departures": 60, "initial_employees": 1000}"#;
    let user = UserId::new();
    let report = service.run(ForecastInput::from_json(body)?, Some(user))?;

    assert_eq!(report.metrics.r2_score, 0.9551);
    assert_eq!(report.metrics.mse, 1234.57);

    // January 2025: 1000 employees -> 40 * 1000 + 2000.
    assert_eq!(report.monthly[0].predicted_salary_mass, 42000.0);
    assert_eq!(report.monthly[0].month_name, "January");
    // December 2025: 1055 employees.
    assert_eq!(report.monthly[11].employee_count_estimate, 1055);
    assert_eq!(report.monthly[11].predicted_salary_mass, 44200.0);

    // Sum over months of 40 * (1000 + 5m) + 2000, m = 0..11.
    assert_eq!(report.predictions[0].total_salary_mass, 517_200.0);
    assert_eq!(report.predictions[0].end_of_year_employees, 1060);
    assert_eq!(report.predictions[1].end_of_year_employees, 1120);

    let history = sink.for_user(user);
    assert_eq!(history.len(), 1);
    let stored: ForecastReport = serde_json::from_str(&history[0].result_json)?;
    assert_eq!(stored, report);
    Ok(())
}

#[test]
fn missing_model_fails_service_construction() {
    let dir = tempfile::tempdir().unwrap();
    let registry = Arc::new(ModelRegistry::new(ModelConfig::new(dir.path())));
    assert!(ForecastService::from_registry(registry).is_err());
}

#[test]
fn unreachable_model_fails_the_whole_projection() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let registry = ModelRegistry::new(ModelConfig::new(dir.path()));
    let request = ForecastRequest::new(2025, 2030, 10, 10, 100)?;

    let err = project(&request, &registry).unwrap_err();
    assert_eq!((err.year, err.month), (2025, 1));
    Ok(())
}

#[test]
fn constant_predictor_two_year_scenario() -> Result<()> {
    let request = ForecastRequest::new(2025, 2026, 120, 60, 1000)?;
    let out = project(&request, &from_fn(|_: &FeatureVector| Ok(1000.0)))?;

    assert_eq!(out.monthly.len(), 24);
    assert!(out.monthly.iter().all(|m| m.predicted_salary_mass == 1000.0));
    assert_eq!(out.yearly[0].total_salary_mass, 12000.0);
    assert_eq!(out.yearly[0].end_of_year_employees, 1060);
    assert_eq!(out.monthly[12].employee_count_estimate, 1060);
    assert_eq!(out.yearly[1].end_of_year_employees, 1120);
    Ok(())
}

#[test]
fn minimum_headcount_reaches_predictor() -> Result<()> {
    let request = ForecastRequest::new(2040, 2041, 0, 1200, 1)?;
    let predictor = from_fn(|fv: &FeatureVector| {
        assert_eq!(fv.nbemp, 1.0);
        Ok(fv.nbemp)
    });
    let out = project(&request, &predictor)?;
    assert!(out.monthly.iter().all(|m| m.employee_count_estimate == 1));
    assert!(out.yearly.iter().all(|y| y.end_of_year_employees == 0));
    Ok(())
}

#[test]
fn validation_examples() {
    let service = ForecastService::new(from_fn(|_: &FeatureVector| Ok(1.0)), Default::default());
    let cases = [
        (ForecastInput::new(1999, 2010, 0, 0, 1), "start year must be between 2000 and 2100"),
        (ForecastInput::new(2020, 2020, 0, 0, 1), "end year must be after start year"),
        (ForecastInput::new(2000, 2025, 0, 0, 1), "forecast range cannot exceed 20 years"),
    ];
    for (input, message) in cases {
        match service.run(input, None) {
            Err(ForecastError::Input(InputError::Invalid(e))) => assert_eq!(e.to_string(), message),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
