use numpy::{PyArray1, PyReadonlyArray1, PyReadwriteArray1};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::error::KernelError;
use crate::parameters::KernelParameters;
use crate::{arithmetic, backend, geometry, parameters};

fn readonly_slice<'a, T: numpy::Element>(
    array: &'a PyReadonlyArray1<'_, T>,
    argument: &'static str,
) -> Result<&'a [T], KernelError> {
    array
        .as_slice()
        .map_err(|_| KernelError::NonContiguous { argument })
}

fn readwrite_slice<'a, T: numpy::Element>(
    array: &'a mut PyReadwriteArray1<'_, T>,
    argument: &'static str,
) -> Result<&'a mut [T], KernelError> {
    array
        .as_slice_mut()
        .map_err(|_| KernelError::NonContiguous { argument })
}

/// Product of two 32-bit integers, wrapping on overflow.
#[pyfunction]
#[pyo3(name = "mul")]
fn py_mul(a: i32, b: i32) -> i32 {
    arithmetic::mul(a, b)
}

/// Dot product of two equal-length int32 arrays, wrapping on overflow.
#[pyfunction]
#[pyo3(name = "dot")]
fn py_dot(py: Python<'_>, a: PyReadonlyArray1<'_, i32>, b: PyReadonlyArray1<'_, i32>) -> PyResult<i32> {
    let a = readonly_slice(&a, "a")?;
    let b = readonly_slice(&b, "b")?;
    Ok(py.allow_threads(|| arithmetic::dot(a, b))?)
}

/// Cross product of two float32 3-vectors.
///
/// Writes into `w` when given, otherwise returns a new array.
#[pyfunction]
#[pyo3(name = "cross", signature = (u, v, w=None))]
fn py_cross<'py>(
    py: Python<'py>,
    u: PyReadonlyArray1<'py, f32>,
    v: PyReadonlyArray1<'py, f32>,
    w: Option<PyReadwriteArray1<'py, f32>>,
) -> PyResult<Option<Bound<'py, PyArray1<f32>>>> {
    let u = readonly_slice(&u, "u")?;
    let v = readonly_slice(&v, "v")?;

    match w {
        Some(mut w) => {
            geometry::cross_into(u, v, readwrite_slice(&mut w, "w")?)?;
            Ok(None)
        }
        None => {
            let mut result = [0.0f32; 3];
            geometry::cross_into(u, v, &mut result)?;
            Ok(Some(PyArray1::from_slice(py, &result)))
        }
    }
}

/// Batched cross product over packed float32 3-vectors.
///
/// Writes into `w` when given, otherwise returns a new array.
#[pyfunction]
#[pyo3(name = "cross_vectors", signature = (u, v, w=None))]
fn py_cross_vectors<'py>(
    py: Python<'py>,
    u: PyReadonlyArray1<'py, f32>,
    v: PyReadonlyArray1<'py, f32>,
    w: Option<PyReadwriteArray1<'py, f32>>,
) -> PyResult<Option<Bound<'py, PyArray1<f32>>>> {
    let u = readonly_slice(&u, "u")?;
    let v = readonly_slice(&v, "v")?;

    match w {
        Some(mut w) => {
            let w = readwrite_slice(&mut w, "w")?;
            py.allow_threads(|| geometry::cross_vectors(u, v, w))?;
            Ok(None)
        }
        None => {
            let mut result = vec![0.0f32; u.len()];
            py.allow_threads(|| geometry::cross_vectors(u, v, &mut result))?;
            Ok(Some(PyArray1::from_vec(py, result)))
        }
    }
}

#[pyfunction]
#[pyo3(name = "get_optimal_backend")]
fn py_get_optimal_backend() -> &'static str {
    backend::get_optimal_backend()
}

#[pyfunction]
#[pyo3(name = "set_backend")]
fn py_set_backend(name: &str) -> PyResult<()> {
    Ok(backend::set_backend(name)?)
}

#[pyfunction]
#[pyo3(name = "clear_backend")]
fn py_clear_backend() {
    backend::clear_backend()
}

#[pyclass(name = "KernelParameters")]
#[derive(Clone)]
pub struct PyKernelParameters {
    inner: KernelParameters,
}

#[pymethods]
impl PyKernelParameters {
    #[new]
    pub fn new() -> Self {
        Self {
            inner: KernelParameters::new(),
        }
    }

    #[getter]
    fn parallel_min_length(&self) -> usize {
        self.inner.parallel_min_length
    }

    #[getter]
    fn parallel_min_vectors(&self) -> usize {
        self.inner.parallel_min_vectors
    }

    #[getter]
    fn parallel_chunk_size(&self) -> usize {
        self.inner.parallel_chunk_size
    }

    pub fn update(&mut self, config: &Bound<'_, PyDict>) -> PyResult<()> {
        let mut updated = self.inner.clone();
        if let Some(value) = config.get_item("parallel_min_length")? {
            updated.parallel_min_length = value.extract::<usize>()?;
        }
        if let Some(value) = config.get_item("parallel_min_vectors")? {
            updated.parallel_min_vectors = value.extract::<usize>()?;
        }
        if let Some(value) = config.get_item("parallel_chunk_size")? {
            updated.parallel_chunk_size = value.extract::<usize>()?;
        }
        updated.validate()?;
        self.inner = updated;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "KernelParameters(parallel_min_length={}, parallel_min_vectors={}, parallel_chunk_size={})",
            self.inner.parallel_min_length,
            self.inner.parallel_min_vectors,
            self.inner.parallel_chunk_size
        )
    }
}

impl Default for PyKernelParameters {
    fn default() -> Self {
        Self::new()
    }
}

/// Install `params` for all subsequent kernel calls.
#[pyfunction]
#[pyo3(name = "configure")]
fn py_configure(params: PyRef<'_, PyKernelParameters>) -> PyResult<()> {
    Ok(parameters::configure(params.inner.clone())?)
}

#[pyfunction]
#[pyo3(name = "current_parameters")]
fn py_current_parameters() -> PyKernelParameters {
    PyKernelParameters {
        inner: parameters::current_parameters(),
    }
}

/// Integer and 3-D vector kernels.
#[pymodule]
fn ctkernels(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py_mul, m)?)?;
    m.add_function(wrap_pyfunction!(py_dot, m)?)?;
    m.add_function(wrap_pyfunction!(py_cross, m)?)?;
    m.add_function(wrap_pyfunction!(py_cross_vectors, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_optimal_backend, m)?)?;
    m.add_function(wrap_pyfunction!(py_set_backend, m)?)?;
    m.add_function(wrap_pyfunction!(py_clear_backend, m)?)?;
    m.add_function(wrap_pyfunction!(py_configure, m)?)?;
    m.add_function(wrap_pyfunction!(py_current_parameters, m)?)?;
    m.add_class::<PyKernelParameters>()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_update_keeps_parameters() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let mut params = PyKernelParameters::new();
            let config = PyDict::new(py);
            config.set_item("parallel_min_length", 10usize).unwrap();
            config.set_item("parallel_chunk_size", 0usize).unwrap();

            assert!(params.update(&config).is_err());
            assert_eq!(params.inner, KernelParameters::default());
        });
    }

    #[test]
    fn test_update_applies_values() {
        pyo3::prepare_freethreaded_python();
        Python::with_gil(|py| {
            let mut params = PyKernelParameters::new();
            let config = PyDict::new(py);
            config.set_item("parallel_min_vectors", 4usize).unwrap();

            params.update(&config).unwrap();
            assert_eq!(params.parallel_min_vectors(), 4);
            assert_eq!(params.parallel_chunk_size(), 8_192);
        });
    }
}
