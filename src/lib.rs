//! bivalve: oyster bioenergetics simulator.
//!
//! Re-exports the engine and adds the presentation layer: a text report
//! for the command line and, behind the `python` feature, the `_core`
//! extension module.

pub mod report;

pub use bivalve_core::*;

#[cfg(feature = "python")]
mod pyo3_bindings;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_bindings::register(m)?;
    Ok(())
}
