//! Python bindings for the `compute_ext` extension module.
//!
//! Exposes the two reductions under their host names. Arguments that do not
//! fit in a signed 64-bit integer are rejected by pyo3 with `OverflowError`
//! before any work starts. The GIL is released while the loop runs.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::ComputeError;
use crate::model::{compute_parallel, compute_sequential};

impl From<ComputeError> for PyErr {
    fn from(err: ComputeError) -> Self {
        match err {
            ComputeError::InvalidInput { .. } | ComputeError::Config { .. } => {
                PyValueError::new_err(err.to_string())
            }
            ComputeError::ThreadPool(_) => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Single-threaded sum of squares: 1e-6 * sum(i*i for i in range(n)).
#[pyfunction]
#[pyo3(signature = (n))]
fn heavy_compute_cpp(py: Python<'_>, n: i64) -> f64 {
    py.allow_threads(|| compute_sequential(n))
}

/// Parallel sum of squares; num_threads <= 0 uses the default worker count.
#[pyfunction]
#[pyo3(signature = (n, num_threads = 0))]
fn heavy_compute_cpp_parallel(py: Python<'_>, n: i64, num_threads: i64) -> PyResult<f64> {
    let value = py.allow_threads(|| compute_parallel(n, num_threads))?;
    Ok(value)
}

#[pymodule]
fn compute_ext(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add(
        "__doc__",
        "Compute-heavy sum-of-squares reductions (sequential and rayon-parallel)",
    )?;
    m.add_function(wrap_pyfunction!(heavy_compute_cpp, m)?)?;
    m.add_function(wrap_pyfunction!(heavy_compute_cpp_parallel, m)?)?;
    Ok(())
}
