//! Crate-level error types.

use thiserror::Error;

/// Errors produced by the adaptation core.
///
/// All variants are value-level and recoverable. Single-item operations
/// fail fast with the specific variant; batch operations isolate failures
/// per item so one malformed input never aborts the rest.
#[derive(Debug, Error)]
pub enum EnsembleError {
    /// A confidence score was NaN or outside [0.0, 1.0].
    ///
    /// Never clamped: the action-class decision depends on confidence
    /// being exact, so masking bad input would corrupt it silently.
    #[error("invalid confidence {value}: must be a number in [0.0, 1.0]")]
    InvalidConfidence { value: f64 },

    /// A role token was not one of the six known roles.
    #[error("unknown role: {token}")]
    UnknownRole { token: String },

    /// A batch entry was missing a required pattern field.
    #[error("batch entry missing required field: {field}")]
    EmptyBatchItem { field: &'static str },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EnsembleError>;
