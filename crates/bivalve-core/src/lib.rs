//! bivalve-core: single-organism bioenergetics for an oyster.
//!
//! Assimilated energy is partitioned among somatic tissue, reserves/gonad and
//! shell by a fixed-step forward Euler loop. Configuration flows one way into
//! the engine, and the engine hands back an [`Output`] by value.
pub mod config;
pub mod error;
pub mod forcing;
pub mod oyster;
pub mod traits;

pub use config::SimulationConfig;
pub use error::{ModelError, Result};
pub use forcing::{Conditions, ConstantForcing, Forcing, ForcingSeries};
pub use oyster::fluxes::{Fluxes, FluxesTimeseries, Output, Snapshot, Trajectory};
pub use oyster::params::Parameters;
pub use oyster::policy::{GrowthCeilingPolicy, NegativeMassPolicy, Policies, SpawningPolicy};
pub use oyster::run::{run, run_config, run_with, step};
pub use oyster::state::{InitialConditions, State};
pub use traits::ModelParams;
