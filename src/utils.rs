//! FFI helpers for the Python bindings: schedule extraction and extras
//! assembly. Everything here is gated behind the `python-bindings`
//! feature; native Rust callers construct
//! [`PumpingSchedule`](crate::wells::PumpingSchedule) and
//! [`SolutionExtras`](crate::solutions::SolutionExtras) directly.
#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
use crate::solutions::extras::SolutionExtras;
#[cfg(feature = "python-bindings")]
use crate::wells::core::schedule::PumpingSchedule;

/// Extract a contiguous 1-D float64 array from a numpy array, a pandas
/// Series (via `to_numpy(copy=False)`), or any float sequence.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Build a validated [`PumpingSchedule`] from a Python rate series and a
/// start-day offset.
#[cfg(feature = "python-bindings")]
pub fn extract_schedule<'py>(
    py: Python<'py>, rates: &Bound<'py, PyAny>, start: usize,
) -> PyResult<PumpingSchedule> {
    let arr = extract_f64_array(py, rates)?;
    let slice = arr.as_slice().map_err(|_| {
        pyo3::exceptions::PyValueError::new_err(
            "rates must be a 1-D contiguous float64 array or sequence",
        )
    })?;
    Ok(PumpingSchedule::new(Array1::from(slice.to_vec()), start)?)
}

/// Assemble a [`SolutionExtras`] value from the flat keyword arguments the
/// Python constructors accept.
#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_extras(
    streambed_conductance: Option<f64>, bprime: Option<f64>, bdouble: Option<f64>,
    sigma: Option<f64>, width: Option<f64>, t2: Option<f64>, s2: Option<f64>,
    streambed_thick: Option<f64>, streambed_k: Option<f64>, aquitard_thick: Option<f64>,
    aquitard_k: Option<f64>, x: Option<f64>, y: Option<f64>,
) -> SolutionExtras {
    SolutionExtras {
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
    }
}
