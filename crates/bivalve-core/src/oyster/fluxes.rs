//! Oyster model outputs.
//!
//! Two per-step records, each with a derived column-oriented series:
//! - `Fluxes` → `FluxesTimeseries`: every budget term of one transition
//! - `Snapshot` → `Trajectory`: elapsed time and the mass pools at one step

use bivalve_macros::Timeseries;

use super::state::State;
use crate::error::{ModelError, Result};

/// Budget terms computed during one transition, as returned by `step()`.
#[derive(Debug, Clone, Copy, PartialEq, Timeseries)]
#[timeseries(name = "FluxesTimeseries")]
pub struct Fluxes {
    pub temperature: f64,          // TEMP [°C]
    pub food: f64,                 // X [-]
    pub functional_response: f64,  // f [-]
    pub ing_temp: f64,             // INGtemp [mg h⁻¹ g⁻¹]
    pub ing_org: f64,              // INGorg [mg h⁻¹]
    pub abs_org: f64,              // ABSorg [g d⁻¹]
    pub max_soma: f64,             // maxSOMA [g d⁻¹]
    pub resp: f64,                 // RESP [g d⁻¹]
    pub shell_gain: f64,           // SHELLgain [g d⁻¹]
    pub soma_gain: f64,            // SOMAgain [g d⁻¹]
    pub resgon_gain: f64,          // RESGONgain [g d⁻¹]
    pub spawned: f64,              // mass released by spawning this step [g]
}

/// Elapsed time and mass pools at one step.
#[derive(Debug, Clone, Copy, PartialEq, Timeseries)]
#[timeseries(name = "Trajectory")]
pub struct Snapshot {
    pub time: f64,    // elapsed [days]
    pub biomass: f64, // B [g]
    pub soma: f64,    // SOMA [g]
    pub resgon: f64,  // RESGON [g]
    pub shell: f64,   // SHELL [g]
}

impl Snapshot {
    pub fn new(time: f64, state: &State) -> Self {
        Self {
            time,
            biomass: state.biomass(),
            soma: state.soma,
            resgon: state.resgon,
            shell: state.shell,
        }
    }
}

/// Result of a full run, as returned by `run()`.
///
/// `trajectory` holds one entry per step (N). `fluxes` holds one entry per
/// transition (N − 1). `final_fluxes` is the last transition only and says
/// nothing about the rest of the run.
#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub trajectory: Trajectory,
    pub fluxes: FluxesTimeseries,
    pub final_fluxes: Fluxes,
}

impl Output {
    /// Number of steps in the trajectory.
    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    /// Returns `true` if the trajectory is empty.
    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Final state of the run.
    pub fn final_snapshot(&self) -> Option<Snapshot> {
        self.trajectory.last()
    }

    /// Look up a series by name: a trajectory column (`time`, `biomass`, ...)
    /// or a flux column (`ing_org`, `resp`, ...). Also accepts the published
    /// upper-case names (`B`, `SOMA`, `RESGON`, `SHELL`).
    pub fn series(&self, name: &str) -> Result<&[f64]> {
        let key = match name {
            "B" => "biomass",
            "SOMA" => "soma",
            "RESGON" => "resgon",
            "SHELL" => "shell",
            other => other,
        };
        self.trajectory
            .column(key)
            .or_else(|| self.fluxes.column(key))
            .ok_or_else(|| ModelError::missing_key("output series", name))
    }
}
