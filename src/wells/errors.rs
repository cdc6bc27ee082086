//! Errors for the wells layer (schedule validation, response construction,
//! and well-level configuration checks).
//!
//! This module defines [`WellError`], covering the three failure classes of
//! the layer: invalid pumping-schedule samples, invalid per-response
//! settings, and configuration mismatches between the target dictionaries a
//! [`Well`](crate::wells::models::well::Well) is built from. Solution-layer
//! failures propagate through the [`WellError::Solution`] wrapper via
//! `From`, so `?` composes across layers.
//!
//! ## Conventions
//! - Configuration mismatches are raised at `Well` construction, before any
//!   response exists (fail-fast; no partial results).
//! - All failures are deterministic functions of the input and are never
//!   retried.
//! - With the `python-bindings` feature, every variant converts to a Python
//!   `ValueError` carrying the `Display` message.
use crate::solutions::errors::SolutionError;

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Result alias for wells-layer operations.
pub type WellResult<T> = Result<T, WellError>;

/// Unified error type for schedules, responses, and wells.
#[derive(Debug, Clone, PartialEq)]
pub enum WellError {
    // ---- Pumping-schedule validation ----
    /// A schedule sample is NaN or ±∞.
    NonFiniteRate { index: usize, value: f64 },

    /// A schedule sample is negative (injection is not modeled).
    NegativeRate { index: usize, value: f64 },

    // ---- Response configuration ----
    /// Apportionment fraction outside [0, 1] or non-finite.
    InvalidApportionment { name: String, value: f64 },

    /// Response kind string is neither `"stream"` nor `"well"`.
    UnknownResponseKind { name: String },

    // ---- Well configuration ----
    /// A stream has a distance but no apportionment entry.
    MissingApportionment { stream: String },

    /// A streambed-conductance map was provided but lacks an entry for a
    /// stream that has a distance.
    MissingConductance { stream: String },

    /// The well-level drawdown method is restricted to the point-drawdown
    /// family; other methods must be run through a response directly.
    UnsupportedDrawdownMethod { method: String },

    // ---- Solution-layer propagation ----
    /// Wrapped error from the analytical solution layer.
    Solution(SolutionError),
}

impl std::error::Error for WellError {}

impl std::fmt::Display for WellError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WellError::NonFiniteRate { index, value } => {
                write!(f, "Pumping rate at index {index} is non-finite: {value}")
            }
            WellError::NegativeRate { index, value } => {
                write!(f, "Pumping rate at index {index} is negative: {value}")
            }
            WellError::InvalidApportionment { name, value } => {
                write!(f, "Apportionment for {name} must lie in [0, 1]; got {value}")
            }
            WellError::UnknownResponseKind { name } => {
                write!(f, "Unknown response kind {name:?}; expected \"stream\" or \"well\"")
            }
            WellError::MissingApportionment { stream } => {
                write!(f, "Configuration error: stream {stream} has a distance but no apportionment entry")
            }
            WellError::MissingConductance { stream } => {
                write!(f, "Configuration error: stream {stream} has a distance but no streambed-conductance entry")
            }
            WellError::UnsupportedDrawdownMethod { method } => {
                write!(
                    f,
                    "Drawdown method {method} is not supported at the well level; use a response directly"
                )
            }
            WellError::Solution(err) => err.fmt(f),
        }
    }
}

impl From<SolutionError> for WellError {
    fn from(err: SolutionError) -> WellError {
        WellError::Solution(err)
    }
}

/// Convert a [`WellError`] into a Python `ValueError` with the error
/// message. Used at the Rust↔Python boundary.
#[cfg(feature = "python-bindings")]
impl std::convert::From<WellError> for PyErr {
    fn from(err: WellError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
