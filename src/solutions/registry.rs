//! Method registries: name → analytical solution dispatch.
//!
//! Purpose
//! -------
//! Map user-facing method names onto the closed-form solutions in
//! [`kernels`](crate::solutions::kernels), one registry for drawdown and one
//! for depletion because the two physical quantities draw on different
//! solution sets. Unknown names are rejected here, at the boundary, so the
//! superposition engine only ever sees a valid method identifier.
//!
//! Key behaviors
//! -------------
//! - [`DrawdownMethod`] and [`DepletionMethod`] are fixed enums; the name
//!   tables are static and assembled at compile time, never mutated.
//! - `from_name` matches case-insensitively after trimming, returning
//!   [`SolutionError::UnknownMethod`] for anything not in the table.
//! - Each method declares its required extra parameters as a static name
//!   list; `validate_extras` checks them against a [`SolutionExtras`] value
//!   once, at response construction, rather than on every evaluation.
//! - `eval` dispatches to the underlying solution, vectorized over the
//!   elapsed-time vector. Drawdown evaluation returns an `(n × columns)`
//!   array so that paired-output solutions (dual-aquifer drawdown) fit the
//!   same signature; every currently registered method has one column.
//!
//! Conventions
//! -----------
//! - Registry names are lowercase (`"theis"`, `"glover"`, `"walton"`,
//!   `"hunt99"`).
//! - [`DepletionMethod::uses_gpd_transmissivity`] flags the one method
//!   whose transmissivity argument is in gpd/ft; callers apply the 7.48
//!   shim before dispatch.
use crate::solutions::errors::{SolutionError, SolutionResult};
use crate::solutions::extras::SolutionExtras;
use crate::solutions::kernels;
use ndarray::{Array1, Array2, ArrayView1, Axis};

/// Registered point-drawdown solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawdownMethod {
    /// Theis (1935) confined-aquifer drawdown.
    Theis,
}

/// Registered streamflow-depletion solutions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepletionMethod {
    /// Glover & Balmer (1954), perfect stream-aquifer connection.
    Glover,
    /// Glover-type solution with transmissivity in gpd/ft.
    Walton,
    /// Hunt (1999), semipervious streambed.
    Hunt99,
}

/// Name table for drawdown methods (lowercase keys).
const DRAWDOWN_METHODS: &[(&str, DrawdownMethod)] = &[("theis", DrawdownMethod::Theis)];

/// Name table for depletion methods (lowercase keys).
const DEPLETION_METHODS: &[(&str, DepletionMethod)] = &[
    ("glover", DepletionMethod::Glover),
    ("walton", DepletionMethod::Walton),
    ("hunt99", DepletionMethod::Hunt99),
];

/// Case-insensitive lookup in a static name table.
fn lookup<M: Copy>(table: &'static [(&'static str, M)], name: &str) -> SolutionResult<M> {
    let lowered = name.trim().to_lowercase();
    table
        .iter()
        .find(|(key, _)| *key == lowered)
        .map(|(_, method)| *method)
        .ok_or_else(|| SolutionError::UnknownMethod { name: name.to_string() })
}

/// Check that every extra a method requires is present, finite, and
/// non-negative.
fn validate_required(
    method: &'static str, required: &'static [&'static str], extras: &SolutionExtras,
) -> SolutionResult<()> {
    for &param in required {
        match extras.get(param) {
            None => return Err(SolutionError::MissingParameter { method, param }),
            Some(value) if !value.is_finite() || value < 0.0 => {
                return Err(SolutionError::InvalidParameter { param, value });
            }
            Some(_) => {}
        }
    }
    Ok(())
}

impl DrawdownMethod {
    /// Resolve a method by name, case-insensitively.
    pub fn from_name(name: &str) -> SolutionResult<DrawdownMethod> {
        lookup(DRAWDOWN_METHODS, name)
    }

    /// Registry name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            DrawdownMethod::Theis => "theis",
        }
    }

    /// Number of output columns the solution reports per time step. Paired
    /// dual-aquifer solutions report two; everything registered today
    /// reports one.
    pub fn output_columns(&self) -> usize {
        match self {
            DrawdownMethod::Theis => 1,
        }
    }

    /// Extra parameters this method requires.
    pub fn required_extras(&self) -> &'static [&'static str] {
        match self {
            DrawdownMethod::Theis => &[],
        }
    }

    /// Validate a [`SolutionExtras`] value against this method's
    /// required-extras list.
    pub fn validate_extras(&self, extras: &SolutionExtras) -> SolutionResult<()> {
        validate_required(self.name(), self.required_extras(), extras)
    }

    /// Evaluate the drawdown solution over a vector of elapsed times.
    ///
    /// Returns an `(n × output_columns)` array of drawdown [ft].
    pub fn eval(
        &self, transmissivity: f64, storage: f64, time: ArrayView1<'_, f64>, dist: f64, q: f64,
        _extras: &SolutionExtras,
    ) -> SolutionResult<Array2<f64>> {
        match self {
            DrawdownMethod::Theis => kernels::theis(transmissivity, storage, time, dist, q)
                .map(|dd| dd.insert_axis(Axis(1))),
        }
    }
}

impl DepletionMethod {
    /// Resolve a method by name, case-insensitively.
    pub fn from_name(name: &str) -> SolutionResult<DepletionMethod> {
        lookup(DEPLETION_METHODS, name)
    }

    /// Registry name of this method.
    pub fn name(&self) -> &'static str {
        match self {
            DepletionMethod::Glover => "glover",
            DepletionMethod::Walton => "walton",
            DepletionMethod::Hunt99 => "hunt99",
        }
    }

    /// Whether this method takes transmissivity in gpd/ft instead of
    /// ft²/day (the caller multiplies by 7.48 before dispatch).
    pub fn uses_gpd_transmissivity(&self) -> bool {
        matches!(self, DepletionMethod::Walton)
    }

    /// Extra parameters this method requires.
    pub fn required_extras(&self) -> &'static [&'static str] {
        match self {
            DepletionMethod::Glover | DepletionMethod::Walton => &[],
            DepletionMethod::Hunt99 => &["streambed_conductance"],
        }
    }

    /// Validate a [`SolutionExtras`] value against this method's
    /// required-extras list.
    pub fn validate_extras(&self, extras: &SolutionExtras) -> SolutionResult<()> {
        validate_required(self.name(), self.required_extras(), extras)
    }

    /// Evaluate the depletion solution over a vector of elapsed times.
    ///
    /// Returns depletion [ft³/day] per time step.
    pub fn eval(
        &self, transmissivity: f64, storage: f64, time: ArrayView1<'_, f64>, dist: f64, q: f64,
        extras: &SolutionExtras,
    ) -> SolutionResult<Array1<f64>> {
        match self {
            DepletionMethod::Glover => kernels::glover(transmissivity, storage, time, dist, q),
            DepletionMethod::Walton => kernels::walton(transmissivity, storage, time, dist, q),
            DepletionMethod::Hunt99 => {
                let streambed_conductance = extras.streambed_conductance.ok_or(
                    SolutionError::MissingParameter {
                        method: "hunt99",
                        param: "streambed_conductance",
                    },
                )?;
                kernels::hunt99(transmissivity, storage, time, dist, q, streambed_conductance)
            }
        }
    }
}

impl std::fmt::Display for DrawdownMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for DepletionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
