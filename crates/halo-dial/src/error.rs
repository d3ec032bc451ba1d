//! Errors raised by the dial engine.
//!
//! Every variant is an invalid-argument error: the caller handed the engine
//! something it cannot draw. Degenerate-but-valid inputs (zero-width ranges,
//! zero-length windows) are never errors and resolve to a well-defined output.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DialError {
    #[error("Segment count must be positive, got {0}")]
    InvalidSegments(usize),

    #[error("Invalid radii: expected 0 <= inner ({inner}) < outer ({outer})")]
    InvalidRadii { inner: f64, outer: f64 },

    #[error("Opacity must be within [0, 1], got {0}")]
    InvalidOpacity(f64),

    #[error("Hour must be within 0..=23, got {0}")]
    InvalidHour(u32),

    #[error("Minute must be within 0..=59, got {0}")]
    InvalidMinute(u32),

    #[error("Dial domain maximum must be positive, got {0}")]
    InvalidDomainMax(f64),

    #[error("Clock frame needs {expected} hourly readings, got {got}")]
    IncompleteFrame { expected: usize, got: usize },

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),
}

pub type Result<T> = std::result::Result<T, DialError>;

/// Reject NaN and infinities early so they never reach path coordinates.
pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DialError::NonFinite(what))
    }
}
