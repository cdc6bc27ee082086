//! Errors for the analytical solution layer (method lookup, physical
//! parameter validation, and required-extra checks).
//!
//! This module defines [`SolutionError`], the error type shared by the
//! solution functions and the method registries. It implements
//! `Display`/`Error` and converts to `PyErr` at the PyO3 boundary when the
//! `python-bindings` feature is enabled.
//!
//! ## Conventions
//! - Method names are matched case-insensitively; an unknown name is
//!   rejected at the registry boundary as [`SolutionError::UnknownMethod`],
//!   never deep inside a superposition loop.
//! - Physical parameters (transmissivity, storage, distance, extras) must be
//!   finite and, where noted, strictly positive; violations are surfaced
//!   with the offending parameter named.
//! - Failures are deterministic functions of the input and are never
//!   retried.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Result alias for solution evaluation and registry lookup paths.
pub type SolutionResult<T> = Result<T, SolutionError>;

/// Unified error type for the analytical solution layer.
///
/// Covers registry lookup failures, rejected physical parameters, and
/// method-specific extra parameters that were required but not supplied.
#[derive(Debug, Clone, PartialEq)]
pub enum SolutionError {
    /// Requested method name is not present in the registry.
    UnknownMethod { name: String },

    /// A physical parameter is non-finite or outside its admissible range
    /// (e.g. non-positive transmissivity).
    InvalidParameter { param: &'static str, value: f64 },

    /// A method-specific extra parameter is required but was not supplied.
    MissingParameter { method: &'static str, param: &'static str },
}

impl std::error::Error for SolutionError {}

impl std::fmt::Display for SolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolutionError::UnknownMethod { name } => {
                write!(f, "Unknown solution method: {name:?}")
            }
            SolutionError::InvalidParameter { param, value } => {
                write!(f, "Parameter {param} must be finite and within its valid range; got {value}")
            }
            SolutionError::MissingParameter { method, param } => {
                write!(f, "Method {method} requires the extra parameter {param}, which was not supplied")
            }
        }
    }
}

/// Convert a [`SolutionError`] into a Python `ValueError` with the error
/// message. Used at the Rust↔Python boundary.
#[cfg(feature = "python-bindings")]
impl std::convert::From<SolutionError> for PyErr {
    fn from(err: SolutionError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
