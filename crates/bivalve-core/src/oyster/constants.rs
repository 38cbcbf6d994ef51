//! Oyster model constants and contract.
//!
//! Fixed values of the energy budget and the default run framework.

// -- Unit conversions --

/// Divisor turning absorbed organic matter into grams per day.
pub const ABSORPTION_DIVISOR: f64 = 1000.24;

/// Divisor turning respiration into grams per day: 1000 mg × 24 h.
pub const RESPIRATION_DIVISOR: f64 = 1000.0 * 24.0;

// -- Default framework --

/// Three years of simulated time [days].
pub const DEFAULT_HORIZON_DAYS: f64 = 365.0 * 3.0;

/// Euler timestep [days].
pub const DEFAULT_DT: f64 = 0.01;

/// Forced average temperature [°C].
pub const DEFAULT_TEMPERATURE: f64 = 20.0;

/// Forced food proxy [-].
pub const DEFAULT_FOOD: f64 = 0.5;

/// Days per year used when reporting elapsed time.
pub const DAYS_PER_YEAR: f64 = 365.0;

// -- Model contract constants --

/// Parameter names in order, spelled as in the published parameter table.
pub const PARAM_NAMES: &[&str] = &[
    "xk",
    "Ingmax",
    "ae",
    "b",
    "br",
    "Ing1",
    "Ing2",
    "Shellcoef",
    "Shellgam",
    "mgO2pom",
    "Rgs1",
    "sm",
    "resp1",
    "resp2",
    "cms1",
    "cms2",
];

/// Number of parameters.
pub const N_PARAMS: usize = 16;

/// State pool names in order.
pub const STATE_NAMES: &[&str] = &["SOMA", "RESGON", "SHELL"];
