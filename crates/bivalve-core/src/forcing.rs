//! Environmental forcing: temperature and food supplied to the engine.
//!
//! The engine asks a `Forcing` for the conditions at the elapsed time of each
//! step. The default is the constant "analytic" forcing of 20 °C and a food
//! proxy of 0.5.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::oyster::constants::{DEFAULT_FOOD, DEFAULT_TEMPERATURE};

/// Conditions seen by the organism during one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conditions {
    /// Water temperature [°C]
    pub temperature: f64,
    /// Food proxy, same units as `xk` [-]
    pub food: f64,
}

/// Source of forcing conditions as a function of elapsed days.
pub trait Forcing {
    fn conditions(&self, t_days: f64) -> Conditions;
}

impl<F> Forcing for F
where
    F: Fn(f64) -> Conditions,
{
    fn conditions(&self, t_days: f64) -> Conditions {
        self(t_days)
    }
}

/// Temperature and food held fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConstantForcing {
    pub temperature: f64,
    pub food: f64,
}

impl Default for ConstantForcing {
    fn default() -> Self {
        Self {
            temperature: DEFAULT_TEMPERATURE,
            food: DEFAULT_FOOD,
        }
    }
}

impl Forcing for ConstantForcing {
    fn conditions(&self, _t_days: f64) -> Conditions {
        Conditions {
            temperature: self.temperature,
            food: self.food,
        }
    }
}

/// Validated tabulated forcing sampled every `spacing_days`.
///
/// Lookup is step-wise: the sample covering `t` is `floor(t / spacing)`, and
/// times past the last sample hold the last value.
#[derive(Debug, Clone)]
pub struct ForcingSeries {
    temperature: Vec<f64>,
    food: Vec<f64>,
    spacing_days: f64,
}

impl ForcingSeries {
    /// Create a new ForcingSeries with validation.
    ///
    /// Validates:
    /// - temperature and food have the same length
    /// - arrays are non-empty
    /// - no NaN values in either array
    /// - spacing is positive and finite
    pub fn new(temperature: Vec<f64>, food: Vec<f64>, spacing_days: f64) -> Result<Self> {
        if temperature.is_empty() {
            return Err(ModelError::invalid_forcing("temperature array is empty"));
        }
        if temperature.len() != food.len() {
            return Err(ModelError::invalid_forcing(format!(
                "temperature length {} does not match food length {}",
                temperature.len(),
                food.len()
            )));
        }
        if temperature.iter().any(|v| v.is_nan()) {
            return Err(ModelError::invalid_forcing(
                "temperature array contains NaN values",
            ));
        }
        if food.iter().any(|v| v.is_nan()) {
            return Err(ModelError::invalid_forcing("food array contains NaN values"));
        }
        if !(spacing_days.is_finite() && spacing_days > 0.0) {
            return Err(ModelError::invalid_forcing(format!(
                "sample spacing must be positive, got {spacing_days}"
            )));
        }
        Ok(Self {
            temperature,
            food,
            spacing_days,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.temperature.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.temperature.is_empty()
    }
}

impl Forcing for ForcingSeries {
    fn conditions(&self, t_days: f64) -> Conditions {
        let last = self.len() - 1;
        let idx = if t_days <= 0.0 {
            0
        } else {
            ((t_days / self.spacing_days) as usize).min(last)
        };
        Conditions {
            temperature: self.temperature[idx],
            food: self.food[idx],
        }
    }
}
