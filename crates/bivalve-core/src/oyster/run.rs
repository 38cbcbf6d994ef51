//! Oyster model orchestration functions.
//!
//! - `step()`: one forward Euler transition → (State, Fluxes)
//! - `run()`: full run under default policies and constant forcing → Output
//! - `run_with()`: full run under explicit policies and any forcing

use tracing::{debug, info, warn};

use super::fluxes::{Fluxes, FluxesTimeseries, Output, Snapshot, Trajectory};
use super::params::Parameters;
use super::policy::{NegativeMassPolicy, Policies};
use super::processes;
use super::state::{InitialConditions, State};
use crate::config::{step_count, SimulationConfig};
use crate::error::{ModelError, Result};
use crate::forcing::{Conditions, ConstantForcing, Forcing};

/// Execute one transition of the energy budget.
///
/// Takes the current state and the conditions of this step, returns the next
/// state and every budget term. The input state is not modified.
pub fn step(
    state: &State,
    params: &Parameters,
    conditions: Conditions,
    policies: &Policies,
    dt: f64,
) -> (State, Fluxes) {
    let Conditions { temperature, food } = conditions;

    // 1. Feeding
    let f = processes::functional_response(food, params.xk);
    let ing_temp = processes::ingestion_temperature_effect(temperature, params.ing1, params.ing2);
    let ing_org = processes::organic_ingestion(params.ingmax, ing_temp, f, state.soma, params.b);
    let abs_org = processes::organic_absorption(params.ae, ing_org);

    // 2. Maintenance
    let max_soma = processes::growth_ceiling(policies.growth_ceiling, state.soma, params);
    let resp = processes::respiration(temperature, state.soma, params);

    // 3. Allocation: shell first, then soma, residual to reserves/gonad
    let shell_gain = processes::shell_gain(abs_org, resp, params.shell_coef, params.shell_gam);
    let soma_gain = processes::soma_gain(max_soma, abs_org, shell_gain, resp);
    let resgon_gain = processes::resgon_gain(abs_org, shell_gain, soma_gain);

    // 4. Spawning
    let spawned =
        processes::spawning_release(policies.spawning, state.resgon, state.biomass(), params.rgs1);

    // 5. Euler update
    let new_state = State {
        soma: state.soma + soma_gain * dt,
        resgon: state.resgon + resgon_gain * dt - spawned,
        shell: state.shell + shell_gain * dt,
    };

    let fluxes = Fluxes {
        temperature,
        food,
        functional_response: f,
        ing_temp,
        ing_org,
        abs_org,
        max_soma,
        resp,
        shell_gain,
        soma_gain,
        resgon_gain,
        spawned,
    };

    (new_state, fluxes)
}

/// Run the model with default policies and constant 20 °C / 0.5 forcing.
pub fn run(
    horizon_days: f64,
    dt: f64,
    params: &Parameters,
    initial: &InitialConditions,
) -> Result<Output> {
    run_with(
        horizon_days,
        dt,
        params,
        initial,
        &Policies::default(),
        &ConstantForcing::default(),
    )
}

/// Run the model described by a full configuration.
pub fn run_config(config: &SimulationConfig) -> Result<Output> {
    run_with(
        config.horizon_days,
        config.dt,
        &config.params,
        &config.initial,
        &config.policies,
        &config.forcing,
    )
}

/// Run the model over `floor(horizon_days / dt)` steps.
///
/// The trajectory has one entry per step starting from the initial
/// conditions; step `i` sits at `i · horizon_days / N` days. Forcing is
/// sampled at the elapsed time of the state being advanced.
pub fn run_with<F: Forcing + ?Sized>(
    horizon_days: f64,
    dt: f64,
    params: &Parameters,
    initial: &InitialConditions,
    policies: &Policies,
    forcing: &F,
) -> Result<Output> {
    info!("Running model...");

    let n = step_count(horizon_days, dt)?;
    let spacing = horizon_days / n as f64;
    debug!(steps = n, dt, spacing, ?policies, "integration geometry");

    if policies.negative_mass == NegativeMassPolicy::Propagate {
        warn!("negative somatic mass will propagate NaN instead of failing");
    }

    let mut state = State::initialize(initial);
    let mut trajectory = Trajectory::with_capacity(n);
    let mut fluxes = FluxesTimeseries::with_capacity(n - 1);
    trajectory.push(&Snapshot::new(0.0, &state));

    // Main simulation loop
    for t in 0..n - 1 {
        if state.soma < 0.0 && policies.negative_mass == NegativeMassPolicy::Reject {
            return Err(ModelError::NegativeMass {
                pool: "SOMA",
                step: t,
                value: state.soma,
            });
        }

        let time = t as f64 * spacing;
        let (new_state, step_fluxes) =
            step(&state, params, forcing.conditions(time), policies, dt);
        fluxes.push(&step_fluxes);
        state = new_state;
        trajectory.push(&Snapshot::new((t + 1) as f64 * spacing, &state));
    }

    // n >= 2 guarantees at least one transition.
    let final_fluxes = fluxes
        .last()
        .ok_or_else(|| ModelError::invalid_config("run produced no transitions"))?;

    info!("Model run: DONE!!!");
    Ok(Output {
        trajectory,
        fluxes,
        final_fluxes,
    })
}
