//! Oyster state variables.
//!
//! Three mass pools evolve during simulation:
//! - `soma`: SOMA, somatic tissue [g]
//! - `resgon`: RESGON, reserve and gonad tissue [g]
//! - `shell`: SHELL, shell mass [g]
//!
//! Total biomass B is always derived from the pools, never stored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::constants::STATE_NAMES;
use crate::error::Result;
use crate::traits::ordered_values;

/// Step-0 pool values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InitialConditions {
    #[serde(rename = "SOMA")]
    pub soma: f64,
    #[serde(rename = "RESGON")]
    pub resgon: f64,
    #[serde(rename = "SHELL")]
    pub shell: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            soma: 0.3,
            resgon: 0.06,
            shell: 0.08,
        }
    }
}

impl InitialConditions {
    /// Build from a `SOMA`/`RESGON`/`SHELL` table; all three are required.
    pub fn from_map(map: &BTreeMap<String, f64>) -> Result<Self> {
        let v = ordered_values(map, STATE_NAMES, "initial condition")?;
        Ok(Self {
            soma: v[0],
            resgon: v[1],
            shell: v[2],
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub soma: f64,
    pub resgon: f64,
    pub shell: f64,
}

impl State {
    /// Create the step-0 state from initial conditions.
    pub fn initialize(initial: &InitialConditions) -> Self {
        Self {
            soma: initial.soma,
            resgon: initial.resgon,
            shell: initial.shell,
        }
    }

    /// B = SOMA + RESGON + SHELL.
    pub fn biomass(&self) -> f64 {
        self.soma + self.resgon + self.shell
    }
}
