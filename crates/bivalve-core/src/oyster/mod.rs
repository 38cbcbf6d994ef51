//! Oyster energy-budget model.
//!
//! Three mass pools (soma, reserves/gonad, shell) fed by absorbed organic
//! matter and drained by respiration, integrated with forward Euler at a
//! fixed timestep.

pub mod constants;
pub mod fluxes;
pub mod params;
pub mod policy;
pub mod processes;
pub mod run;
pub mod state;
