//! Error taxonomy for the resize engine.
//!
//! Every error is local and recoverable by the caller: the offending call is
//! rejected and any active gesture session is left exactly as it was.
//! Overflow and minimum-size clamping are defined behaviour, never errors.

use crate::delta::Edge;

/// Gesture protocol phase, used to describe state violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Dragging,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::Dragging => f.write_str("dragging"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResizeError {
    #[error("invalid gesture state: expected {expected}, found {found}")]
    InvalidState { expected: Phase, found: Phase },
    #[error("invalid input: {field} = {value}")]
    InvalidInput { field: &'static str, value: f64 },
    #[error("unsupported resize edge: {0:?}")]
    UnsupportedEdge(Edge),
}

impl ResizeError {
    /// Stable machine-readable code for host-side reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidState { .. } => "E_INVALID_STATE",
            Self::InvalidInput { .. } => "E_INVALID_INPUT",
            Self::UnsupportedEdge(_) => "E_UNSUPPORTED_EDGE",
        }
    }
}

/// Reject non-finite values for `field`.
///
/// # Errors
///
/// Returns `InvalidInput` when `value` is NaN or infinite.
pub fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ResizeError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ResizeError::InvalidInput { field, value })
    }
}

/// Reject non-finite or negative values for `field`.
///
/// # Errors
///
/// Returns `InvalidInput` when `value` is NaN, infinite, or below zero.
pub fn ensure_non_negative(field: &'static str, value: f64) -> Result<f64, ResizeError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ResizeError::InvalidInput { field, value })
    }
}

/// Reject anything that is not a finite, strictly positive value.
///
/// # Errors
///
/// Returns `InvalidInput` when `value` is NaN, infinite, zero, or negative.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<f64, ResizeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ResizeError::InvalidInput { field, value })
    }
}
