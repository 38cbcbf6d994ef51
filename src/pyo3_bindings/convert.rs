use bivalve_core::ModelError;
use pyo3::exceptions::{PyKeyError, PyValueError};
use pyo3::prelude::*;

/// Map engine errors onto Python exceptions: lookups become `KeyError`,
/// everything else `ValueError`.
pub fn to_py_err(err: ModelError) -> PyErr {
    match err {
        ModelError::MissingKey { .. } | ModelError::UnknownKey { .. } => {
            PyKeyError::new_err(err.to_string())
        }
        _ => PyValueError::new_err(err.to_string()),
    }
}
