use std::collections::BTreeMap;

use numpy::PyArray1;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use super::convert::to_py_err;
use bivalve_core::traits::ModelParams;
use bivalve_core::{
    run_config, GrowthCeilingPolicy, InitialConditions, Parameters, SimulationConfig,
    SpawningPolicy,
};

/// Default horizon, timestep, parameters and initial conditions, keyed as in
/// the published parameter table.
#[pyfunction]
fn defaults<'py>(py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
    let c = SimulationConfig::load_defaults();
    let dict = PyDict::new(py);
    dict.set_item("days", c.horizon_days)?;
    dict.set_item("dt", c.dt)?;
    dict.set_item("par", c.params.to_map())?;

    let init = PyDict::new(py);
    init.set_item("SOMA", c.initial.soma)?;
    init.set_item("RESGON", c.initial.resgon)?;
    init.set_item("SHELL", c.initial.shell)?;
    dict.set_item("InitCond", init)?;
    Ok(dict)
}

/// Run the model. Omitted arguments keep their defaults; a supplied `params`
/// or `initial` dict must be complete.
#[pyfunction]
#[pyo3(signature = (horizon_days=None, dt=None, params=None, initial=None, growth_ceiling=None, spawning=None))]
fn run<'py>(
    py: Python<'py>,
    horizon_days: Option<f64>,
    dt: Option<f64>,
    params: Option<BTreeMap<String, f64>>,
    initial: Option<BTreeMap<String, f64>>,
    growth_ceiling: Option<String>,
    spawning: Option<String>,
) -> PyResult<Bound<'py, PyDict>> {
    let mut config = SimulationConfig::load_defaults();
    if let Some(h) = horizon_days {
        config.horizon_days = h;
    }
    if let Some(dt) = dt {
        config.dt = dt;
    }
    if let Some(table) = params {
        config.params = Parameters::from_map(&table).map_err(to_py_err)?;
    }
    if let Some(table) = initial {
        config.initial = InitialConditions::from_map(&table).map_err(to_py_err)?;
    }
    if let Some(name) = growth_ceiling.as_deref() {
        config.policies.growth_ceiling = name.parse::<GrowthCeilingPolicy>().map_err(to_py_err)?;
    }
    if let Some(name) = spawning.as_deref() {
        config.policies.spawning = name.parse::<SpawningPolicy>().map_err(to_py_err)?;
    }

    let result = py.allow_threads(|| run_config(&config)).map_err(to_py_err)?;
    let last = result.final_fluxes;
    let t = result.trajectory;

    let dict = PyDict::new(py);
    dict.set_item("INGorg", last.ing_org)?;
    dict.set_item("INGtemp", last.ing_temp)?;
    dict.set_item("ABSorg", last.abs_org)?;
    dict.set_item("maxSOMA", last.max_soma)?;
    dict.set_item("RESP", last.resp)?;
    dict.set_item("time", PyArray1::from_vec(py, t.time))?;
    dict.set_item("B", PyArray1::from_vec(py, t.biomass))?;
    dict.set_item("SOMA", PyArray1::from_vec(py, t.soma))?;
    dict.set_item("RESGON", PyArray1::from_vec(py, t.resgon))?;
    dict.set_item("SHELL", PyArray1::from_vec(py, t.shell))?;

    let fluxes = PyDict::new(py);
    for (name, column) in result.fluxes.columns() {
        fluxes.set_item(name, PyArray1::from_slice(py, column))?;
    }
    dict.set_item("fluxes", fluxes)?;
    Ok(dict)
}

pub fn register(parent: &Bound<'_, PyModule>) -> PyResult<()> {
    let m = PyModule::new(parent.py(), "oyster")?;
    m.add_function(wrap_pyfunction!(defaults, &m)?)?;
    m.add_function(wrap_pyfunction!(run, &m)?)?;
    parent.add_submodule(&m)?;
    Ok(())
}
