//! Pure Rust engine benchmarks.
//!
//! Uses std::time::Instant for timing and std::hint::black_box to prevent
//! dead-code elimination. Reports the median of several repeats per horizon.

use std::hint::black_box;
use std::time::{Duration, Instant};

use bivalve_core::forcing::{Conditions, ForcingSeries};
use bivalve_core::oyster::params::Parameters;
use bivalve_core::oyster::policy::Policies;
use bivalve_core::oyster::run;
use bivalve_core::oyster::state::InitialConditions;

const REPEATS: usize = 7;
const DT: f64 = 0.01;

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

/// Daily temperature and food with an annual cycle.
fn seasonal_series(days: usize) -> ForcingSeries {
    let phase = |d: usize| (d as f64 / 365.0 * std::f64::consts::TAU).sin();
    let temperature = (0..days).map(|d| 14.0 + 6.0 * phase(d)).collect();
    let food = (0..days).map(|d| 0.5 + 0.3 * phase(d)).collect();
    match ForcingSeries::new(temperature, food, 1.0) {
        Ok(series) => series,
        Err(e) => panic!("bench forcing rejected: {e}"),
    }
}

fn bench_constant(horizons: &[f64]) -> Vec<(&'static str, f64, Duration)> {
    let params = Parameters::default();
    let initial = InitialConditions::default();
    let mut results = Vec::new();

    for &days in horizons {
        // Warmup
        let _ = black_box(run::run(days, DT, &params, &initial));

        let dur = median_time(|| {
            let _ = black_box(run::run(days, DT, &params, &initial));
        });
        results.push(("constant", days, dur));
    }
    results
}

fn bench_seasonal(horizons: &[f64]) -> Vec<(&'static str, f64, Duration)> {
    let params = Parameters::default();
    let initial = InitialConditions::default();
    let policies = Policies::default();
    let mut results = Vec::new();

    for &days in horizons {
        let forcing = seasonal_series(days as usize + 1);
        let _ = black_box(run::run_with(days, DT, &params, &initial, &policies, &forcing));

        let dur = median_time(|| {
            let _ = black_box(run::run_with(days, DT, &params, &initial, &policies, &forcing));
        });
        results.push(("seasonal", days, dur));
    }
    results
}

fn bench_closure(horizons: &[f64]) -> Vec<(&'static str, f64, Duration)> {
    let params = Parameters::default();
    let initial = InitialConditions::default();
    let policies = Policies::default();
    let forcing = |t: f64| Conditions {
        temperature: 20.0 + (t / 30.0).sin(),
        food: 0.5,
    };
    let mut results = Vec::new();

    for &days in horizons {
        let _ = black_box(run::run_with(days, DT, &params, &initial, &policies, &forcing));

        let dur = median_time(|| {
            let _ = black_box(run::run_with(days, DT, &params, &initial, &policies, &forcing));
        });
        results.push(("closure", days, dur));
    }
    results
}

fn main() {
    println!("Pure Rust Engine Benchmarks (dt = {DT} d)");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Forcing", "Days", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, f64, Duration)> = Vec::new();

    all_results.extend(bench_constant(&[365.0, 1095.0, 3650.0]));
    all_results.extend(bench_seasonal(&[1095.0, 3650.0]));
    all_results.extend(bench_closure(&[1095.0, 3650.0]));

    for (forcing, days, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>8.0}      {:>8.2}", forcing, days, ms);
    }

    println!("============================================================");
}
