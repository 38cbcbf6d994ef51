//! End-to-end checks of the published three-year run.

use bivalve_core::{run, InitialConditions, Parameters, SimulationConfig};

fn assert_approx(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}

fn default_run() -> bivalve_core::Output {
    let c = SimulationConfig::load_defaults();
    run(c.horizon_days, c.dt, &c.params, &c.initial).expect("default run succeeds")
}

#[test]
fn every_series_has_one_entry_per_step() {
    let out = default_run();
    let n = 109_500;
    let t = &out.trajectory;
    assert_eq!(t.time.len(), n);
    assert_eq!(t.biomass.len(), n);
    assert_eq!(t.soma.len(), n);
    assert_eq!(t.resgon.len(), n);
    assert_eq!(t.shell.len(), n);
    assert_eq!(out.fluxes.len(), n - 1);
}

#[test]
fn starts_from_initial_conditions() {
    let out = default_run();
    let t = &out.trajectory;
    assert_eq!(t.soma[0], 0.3);
    assert_eq!(t.resgon[0], 0.06);
    assert_eq!(t.shell[0], 0.08);
    assert_approx(t.biomass[0], 0.44, 1e-12);
    assert_eq!(t.time[0], 0.0);
}

#[test]
fn biomass_is_sum_of_pools_at_every_step() {
    let out = default_run();
    let t = &out.trajectory;
    for i in 0..t.len() {
        let sum = t.soma[i] + t.resgon[i] + t.shell[i];
        assert_approx(t.biomass[i], sum, 1e-12);
    }
}

#[test]
fn time_advances_by_dt() {
    let out = default_run();
    let time = &out.trajectory.time;
    assert!(time.windows(2).all(|w| w[1] > w[0]));
    assert_approx(time[1], 0.01, 1e-15);
    assert_approx(time[time.len() - 1], 1094.99, 1e-9);
}

#[test]
fn repeated_runs_are_bit_identical() {
    let a = default_run();
    let b = default_run();
    assert_eq!(a, b);
}

#[test]
fn first_transition_matches_hand_computation() {
    let out = default_run();
    let f = &out.fluxes;
    assert_approx(f.functional_response[0], 0.5, 1e-15);
    assert_approx(f.ing_temp[0], 0.06, 1e-15);
    assert_approx(f.ing_org[0], 4.955719, 1e-6);
    assert_approx(f.abs_org[0], 0.001238632, 1e-9);
    assert_approx(out.trajectory.soma[1], 0.300012072, 1e-9);
}

#[test]
fn three_year_end_state() {
    let out = default_run();
    let end = out.final_snapshot().expect("non-empty run");
    assert_approx(end.soma, 4.431082336659013, 1e-9);
    assert_approx(end.resgon, 0.06199330791631915, 1e-9);
    assert_approx(end.shell, 0.18597629857885664, 1e-9);
    assert_approx(end.biomass, 4.679051943154189, 1e-9);
}

#[test]
fn final_fluxes_describe_last_transition_only() {
    let out = default_run();
    let last = out.final_fluxes;
    assert_eq!(last.ing_temp, 0.06);
    assert_eq!(last.max_soma, 0.044);
    assert_approx(last.ing_org, 29.302082860664978, 1e-7);
    assert_approx(last.abs_org, 0.007323763012043354, 1e-12);
    assert_approx(last.resp, 3.838389562596313e-06, 1e-15);
    assert!(last.ing_org > out.fluxes.ing_org[0]);
}

#[test]
fn starvation_keeps_shell_constant() {
    let params = Parameters {
        ae: 0.0,
        ..Parameters::default()
    };
    let out = run(10.0, 0.01, &params, &InitialConditions::default()).unwrap();
    let shell = &out.trajectory.shell;
    assert_eq!(shell[1], shell[0]);
    assert!(shell.iter().all(|&s| s == 0.08));
    assert!(out.fluxes.shell_gain.iter().all(|&g| g == 0.0));
}

#[test]
fn series_lookup_by_published_names() {
    let out = default_run();
    for name in ["time", "B", "SOMA", "RESGON", "SHELL"] {
        assert_eq!(out.series(name).unwrap().len(), 109_500);
    }
    assert!(out.series("Spawning").is_err());
}
