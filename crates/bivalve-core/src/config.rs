//! Run configuration: horizon, timestep, parameters, initial conditions,
//! policies and forcing.
//!
//! ## Configuration hierarchy
//!
//! 1. Default values (`SimulationConfig::load_defaults`)
//! 2. A TOML document (`SimulationConfig::from_toml`) overriding the defaults
//! 3. Command-line flags applied by the binary
//!
//! ## Example
//!
//! ```toml
//! horizon_days = 730.0
//! dt = 0.05
//!
//! [policies]
//! growth_ceiling = "size_dependent"
//! spawning = "threshold_based"
//!
//! [forcing]
//! temperature = 18.0
//! food = 0.8
//!
//! [initial_conditions]
//! SOMA = 0.5
//! RESGON = 0.1
//! SHELL = 0.2
//! ```
//!
//! A `[parameters]` or `[initial_conditions]` table replaces the defaults as a
//! whole: every key must be present.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::info;

use crate::error::{ModelError, Result};
use crate::forcing::ConstantForcing;
use crate::oyster::constants::{DEFAULT_DT, DEFAULT_HORIZON_DAYS};
use crate::oyster::params::Parameters;
use crate::oyster::policy::Policies;
use crate::oyster::state::InitialConditions;
use crate::traits::ModelParams;

/// Everything one run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Simulated time [days]
    pub horizon_days: f64,
    /// Euler timestep [days]
    pub dt: f64,
    pub params: Parameters,
    pub initial: InitialConditions,
    pub policies: Policies,
    pub forcing: ConstantForcing,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            horizon_days: DEFAULT_HORIZON_DAYS,
            dt: DEFAULT_DT,
            params: Parameters::default(),
            initial: InitialConditions::default(),
            policies: Policies::default(),
            forcing: ConstantForcing::default(),
        }
    }
}

/// On-disk shape of a configuration document. Absent entries keep defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    horizon_days: Option<f64>,
    dt: Option<f64>,
    parameters: Option<BTreeMap<String, f64>>,
    initial_conditions: Option<BTreeMap<String, f64>>,
    policies: Option<Policies>,
    forcing: Option<ConstantForcing>,
}

impl SimulationConfig {
    /// Three years at a 0.01-day step with the published parameter set.
    pub fn load_defaults() -> Self {
        info!("Loading defaults...");
        Self::default()
    }

    /// Parse a TOML document on top of the defaults and validate the result.
    pub fn from_toml(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        let mut config = Self::load_defaults();
        if let Some(horizon_days) = file.horizon_days {
            config.horizon_days = horizon_days;
        }
        if let Some(dt) = file.dt {
            config.dt = dt;
        }
        if let Some(table) = &file.parameters {
            config.params = Parameters::from_map(table)?;
        }
        if let Some(table) = &file.initial_conditions {
            config.initial = InitialConditions::from_map(table)?;
        }
        if let Some(policies) = file.policies {
            config.policies = policies;
        }
        if let Some(forcing) = file.forcing {
            config.forcing = forcing;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject horizons and timesteps that cannot produce a run.
    pub fn validate(&self) -> Result<()> {
        step_count(self.horizon_days, self.dt).map(|_| ())
    }

    /// `N = floor(horizon_days / dt)`.
    pub fn step_count(&self) -> Result<usize> {
        step_count(self.horizon_days, self.dt)
    }
}

/// Number of stored steps for a run, `floor(horizon_days / dt)`.
///
/// Fails when either input is non-positive or non-finite, or when fewer than
/// two steps would result (nothing to advance).
pub fn step_count(horizon_days: f64, dt: f64) -> Result<usize> {
    if !(dt.is_finite() && dt > 0.0) {
        return Err(ModelError::invalid_config(format!(
            "dt must be positive and finite, got {dt}"
        )));
    }
    if !(horizon_days.is_finite() && horizon_days > 0.0) {
        return Err(ModelError::invalid_config(format!(
            "horizon_days must be positive and finite, got {horizon_days}"
        )));
    }
    let ratio = (horizon_days / dt).floor();
    if ratio >= usize::MAX as f64 {
        return Err(ModelError::invalid_config(format!(
            "horizon_days / dt = {ratio} steps is too many"
        )));
    }
    let n = ratio as usize;
    if n < 2 {
        return Err(ModelError::invalid_config(format!(
            "horizon_days / dt gives {n} step(s); at least 2 are required"
        )));
    }
    Ok(n)
}
