//! wellcap — analytical well-capture calculations with Python bindings.
//!
//! Purpose
//! -------
//! Estimate the hydraulic effect of a pumping water well over time at one
//! or more observation points — drawdown at assessed wells or springs, and
//! streamflow depletion in stream reaches — using closed-form analytical
//! groundwater-flow solutions superposed over an arbitrary
//! piecewise-constant pumping schedule. When the `python-bindings` feature
//! is enabled, this module also defines the `_wellcap` PyO3 extension
//! exposing the same calculations to Python.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules ([`solutions`] and [`wells`]) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers (`WellResponse`, `Well`) and the
//!   `#[pymodule]` initializer for the `_wellcap` extension, plus the
//!   gpm/cfd/cfs unit constants as module attributes.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs
//!   only FFI glue, input conversion, and error mapping.
//! - Errors from core code are rich enum values internally and convert to
//!   Python `ValueError` at the PyO3 boundary.
//!
//! Conventions
//! -----------
//! - Units are feet and days (rates ft³/day) throughout; conversion
//!   constants live in [`solutions::units`] and are re-exported to Python.
//! - Python-facing pumping schedules accept a 1-D numpy array, a pandas
//!   Series, or any float sequence.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on [`wells::prelude`] and ignore the
//!   PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports `_wellcap` and wraps its classes.

pub mod solutions;
pub mod utils;
pub mod wells;

#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;
#[cfg(feature = "python-bindings")]
use pyo3::types::PyAny;
#[cfg(feature = "python-bindings")]
use std::collections::{BTreeMap, HashMap};

#[cfg(feature = "python-bindings")]
use crate::{
    solutions::registry::{DepletionMethod, DrawdownMethod},
    solutions::units::{CFD2CFS, CFD2GPM, GPM2CFD},
    utils::{build_extras, extract_schedule},
    wells::models::response::ResponseKind,
};

/// WellResponse — Python-facing wrapper for a single (well, target)
/// response.
///
/// Purpose
/// -------
/// Expose one observation target's drawdown / depletion calculation to
/// Python, forwarding all computation to the inner
/// [`wells::WellResponse`].
///
/// Key behaviors
/// -------------
/// - Validate and convert the Python pumping schedule into a
///   [`wells::PumpingSchedule`].
/// - Resolve method names through the registries at construction, so an
///   unknown method fails the constructor rather than the first property
///   read.
/// - Expose `drawdown`, `depletion`, and `peak_depletion` as properties;
///   series are computed lazily on the Rust side and memoized there.
///
/// Notes
/// -----
/// - Native Rust code should use [`wells::WellResponse`] directly; this
///   type exists solely for the PyO3 surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "wellcap", name = "WellResponse")]
pub struct PyWellResponse {
    /// Underlying Rust response.
    inner: wells::WellResponse,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyWellResponse {
    #[new]
    #[pyo3(
        signature = (
            name,
            response_type,
            t,
            s,
            dist,
            rates,
            start = 0,
            stream_apportionment = None,
            dd_method = "theis",
            depl_method = "glover",
            streambed_conductance = None,
            bprime = None,
            bdouble = None,
            sigma = None,
            width = None,
            t2 = None,
            s2 = None,
            streambed_thick = None,
            streambed_k = None,
            aquitard_thick = None,
            aquitard_k = None,
            x = None,
            y = None,
        ),
        text_signature = "(name, response_type, t, s, dist, rates, /, start=0, \
                          stream_apportionment=None, dd_method='theis', depl_method='glover', \
                          streambed_conductance=None, bprime=None, bdouble=None, sigma=None, \
                          width=None, t2=None, s2=None, streambed_thick=None, streambed_k=None, \
                          aquitard_thick=None, aquitard_k=None, x=None, y=None)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new<'py>(
        py: Python<'py>, name: &str, response_type: &str, t: f64, s: f64, dist: f64,
        rates: &Bound<'py, PyAny>, start: usize, stream_apportionment: Option<f64>,
        dd_method: &str, depl_method: &str, streambed_conductance: Option<f64>,
        bprime: Option<f64>, bdouble: Option<f64>, sigma: Option<f64>, width: Option<f64>,
        t2: Option<f64>, s2: Option<f64>, streambed_thick: Option<f64>,
        streambed_k: Option<f64>, aquitard_thick: Option<f64>, aquitard_k: Option<f64>,
        x: Option<f64>, y: Option<f64>,
    ) -> PyResult<PyWellResponse> {
        let schedule = extract_schedule(py, rates, start)?;
        let kind = ResponseKind::from_name(response_type)?;
        let dd = DrawdownMethod::from_name(dd_method)?;
        let depl = DepletionMethod::from_name(depl_method)?;
        let extras = build_extras(
            streambed_conductance,
            bprime,
            bdouble,
            sigma,
            width,
            t2,
            s2,
            streambed_thick,
            streambed_k,
            aquitard_thick,
            aquitard_k,
            x,
            y,
        );
        let inner = wells::WellResponse::new(
            name,
            kind,
            t,
            s,
            dist,
            schedule,
            stream_apportionment,
            dd,
            depl,
            extras,
        )?;
        Ok(PyWellResponse { inner })
    }

    /// Observation-target name.
    #[getter]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    /// Drawdown time series [ft] (first solution column).
    #[getter]
    pub fn drawdown(&self) -> PyResult<Vec<f64>> {
        let dd = self.inner.drawdown()?;
        Ok(dd.column(0).to_vec())
    }

    /// Streamflow-depletion time series [ft³/day].
    #[getter]
    pub fn depletion(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.depletion()?.to_vec())
    }

    /// Maximum absolute depletion over the series [ft³/day].
    #[getter]
    pub fn peak_depletion(&self) -> PyResult<f64> {
        Ok(self.inner.peak_depletion()?)
    }
}

/// Well — Python-facing wrapper for the per-well fan-out.
///
/// Purpose
/// -------
/// Expose the [`wells::Well`] aggregation to Python: one response per
/// configured stream / drawdown point, with dict outputs keyed by target
/// name.
///
/// Notes
/// -----
/// - Configuration dictionaries are validated fail-fast at construction,
///   exactly as on the Rust side; a key-set mismatch raises `ValueError`
///   before any series is computed.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "wellcap", name = "Well")]
pub struct PyWell {
    /// Underlying Rust well.
    inner: wells::Well,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl PyWell {
    #[new]
    #[pyo3(
        signature = (
            t,
            s,
            rates,
            start = 0,
            stream_dist = None,
            drawdown_dist = None,
            stream_apportionment = None,
            streambed_conductance = None,
            depl_method = "glover",
            dd_method = "theis",
            bprime = None,
            bdouble = None,
            sigma = None,
            width = None,
            t2 = None,
            s2 = None,
            streambed_thick = None,
            streambed_k = None,
            aquitard_thick = None,
            aquitard_k = None,
            x = None,
            y = None,
        ),
        text_signature = "(t, s, rates, /, start=0, stream_dist=None, drawdown_dist=None, \
                          stream_apportionment=None, streambed_conductance=None, \
                          depl_method='glover', dd_method='theis', bprime=None, bdouble=None, \
                          sigma=None, width=None, t2=None, s2=None, streambed_thick=None, \
                          streambed_k=None, aquitard_thick=None, aquitard_k=None, x=None, y=None)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn new<'py>(
        py: Python<'py>, t: f64, s: f64, rates: &Bound<'py, PyAny>, start: usize,
        stream_dist: Option<HashMap<String, f64>>, drawdown_dist: Option<HashMap<String, f64>>,
        stream_apportionment: Option<HashMap<String, f64>>,
        streambed_conductance: Option<HashMap<String, f64>>, depl_method: &str, dd_method: &str,
        bprime: Option<f64>, bdouble: Option<f64>, sigma: Option<f64>, width: Option<f64>,
        t2: Option<f64>, s2: Option<f64>, streambed_thick: Option<f64>,
        streambed_k: Option<f64>, aquitard_thick: Option<f64>, aquitard_k: Option<f64>,
        x: Option<f64>, y: Option<f64>,
    ) -> PyResult<PyWell> {
        let schedule = extract_schedule(py, rates, start)?;
        let depl = DepletionMethod::from_name(depl_method)?;
        let dd = DrawdownMethod::from_name(dd_method)?;
        let extras = build_extras(
            None,
            bprime,
            bdouble,
            sigma,
            width,
            t2,
            s2,
            streambed_thick,
            streambed_k,
            aquitard_thick,
            aquitard_k,
            x,
            y,
        );
        let inner = wells::Well::new(
            t,
            s,
            schedule,
            &stream_dist.unwrap_or_default(),
            &drawdown_dist.unwrap_or_default(),
            &stream_apportionment.unwrap_or_default(),
            streambed_conductance.as_ref(),
            depl,
            dd,
            extras,
        )?;
        Ok(PyWell { inner })
    }

    /// Drawdown series per point target [ft], keyed by name.
    #[getter]
    pub fn drawdown(&self) -> PyResult<BTreeMap<String, Vec<f64>>> {
        let map = self.inner.drawdown()?;
        Ok(map.into_iter().map(|(name, series)| (name, series.to_vec())).collect())
    }

    /// Depletion series per stream [ft³/day], keyed by name.
    #[getter]
    pub fn depletion(&self) -> PyResult<BTreeMap<String, Vec<f64>>> {
        let map = self.inner.depletion()?;
        Ok(map.into_iter().map(|(name, series)| (name, series.to_vec())).collect())
    }

    /// Peak depletion per stream [ft³/day], keyed by name.
    #[getter]
    pub fn max_depletion(&self) -> PyResult<BTreeMap<String, f64>> {
        Ok(self.inner.max_depletion()?)
    }
}

/// _wellcap — PyO3 module initializer for the Python extension.
///
/// Registers the `WellResponse` and `Well` classes and the unit-conversion
/// constants. Invoked automatically by Python on import.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _wellcap<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<PyWellResponse>()?;
    m.add_class::<PyWell>()?;
    m.add("GPM2CFD", GPM2CFD)?;
    m.add("CFD2GPM", CFD2GPM)?;
    m.add("CFD2CFS", CFD2CFS)?;
    Ok(())
}
