//! Model location configuration.

use std::path::PathBuf;

/// Environment variable overriding the artifact directory.
pub const MODEL_DIR_ENV: &str = "SALARYMASS_MODEL_DIR";

/// Default artifact directory, relative to the working directory.
pub const DEFAULT_MODEL_DIR: &str = "ml_models/artifacts";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelConfig {
    pub artifacts_dir: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            artifacts_dir: PathBuf::from(DEFAULT_MODEL_DIR),
        }
    }
}

impl ModelConfig {
    pub fn new(artifacts_dir: impl Into<PathBuf>) -> Self {
        Self {
            artifacts_dir: artifacts_dir.into(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        let dir = std::env::var(MODEL_DIR_ENV).unwrap_or_else(|_| {
            tracing::debug!("{MODEL_DIR_ENV} not set; using {DEFAULT_MODEL_DIR}");
            DEFAULT_MODEL_DIR.to_string()
        });
        Self::new(dir)
    }

    pub fn model_path(&self) -> PathBuf {
        self.artifacts_dir.join(crate::artifacts::MODEL_FILE)
    }

    pub fn metrics_path(&self) -> PathBuf {
        self.artifacts_dir.join(crate::artifacts::METRICS_FILE)
    }
}
