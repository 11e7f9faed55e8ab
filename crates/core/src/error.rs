//! Domain error model.

use thiserror::Error;

/// Domain-level error.
///
/// Deterministic failures of the shared primitives. Validation, model loading
/// and inference failures have their own error types in the crates that own
/// those concerns.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
