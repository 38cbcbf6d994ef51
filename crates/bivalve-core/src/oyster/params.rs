//! Oyster energy-budget parameters.
//!
//! Sixteen scalars; field names are the snake_case form of the published
//! keys, which remain the serialized names.

use serde::{Deserialize, Serialize};

use super::constants::{N_PARAMS, PARAM_NAMES};
use crate::error::{ModelError, Result};
use crate::traits::{check_len, ModelParams};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Parameters {
    /// Half-saturation constant of the food functional response
    pub xk: f64,
    /// Maximum ingestion rate [mg POM h⁻¹ g⁻¹]
    #[serde(rename = "Ingmax")]
    pub ingmax: f64,
    /// Assimilation efficiency [-]
    pub ae: f64,
    /// Allometric exponent of ingestion
    pub b: f64,
    /// Allometric exponent of respiration
    pub br: f64,
    /// Temperature-effect coefficient on ingestion
    #[serde(rename = "Ing1")]
    pub ing1: f64,
    /// Temperature optimum of ingestion [°C]
    #[serde(rename = "Ing2")]
    pub ing2: f64,
    #[serde(rename = "Shellcoef")]
    pub shell_coef: f64,
    #[serde(rename = "Shellgam")]
    pub shell_gam: f64,
    /// Respiration unit conversion factor
    #[serde(rename = "mgO2pom")]
    pub mg_o2_pom: f64,
    /// RESGON / B ratio that triggers spawning
    #[serde(rename = "Rgs1")]
    pub rgs1: f64,
    /// SOMA size separating the two growth ceilings [g]
    pub sm: f64,
    pub resp1: f64,
    pub resp2: f64,
    /// Maximal somatic growth below `sm` [g d⁻¹]
    pub cms1: f64,
    /// Maximal somatic growth at or above `sm` [g d⁻¹]
    pub cms2: f64,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            xk: 0.5,
            ingmax: 22.0,
            ae: 0.25,
            b: 0.66,
            br: 0.8,
            ing1: 0.06,
            ing2: 19.0,
            shell_coef: 0.05,
            shell_gam: 0.5,
            mg_o2_pom: 0.7,
            rgs1: 0.2,
            sm: 1.5,
            resp1: 0.2,
            resp2: 0.1,
            cms1: 0.0293,
            cms2: 0.044,
        }
    }
}

impl Parameters {
    /// Check that every value is finite and the multiplicative rate
    /// coefficients are non-negative.
    ///
    /// The engine never calls this; it integrates whatever it is given.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in PARAM_NAMES.iter().copied().zip(self.to_array()) {
            if !value.is_finite() {
                return Err(ModelError::InvalidParameter {
                    name,
                    value,
                    reason: "must be finite",
                });
            }
        }
        let rates = [
            ("Ingmax", self.ingmax),
            ("ae", self.ae),
            ("resp1", self.resp1),
            ("Shellcoef", self.shell_coef),
        ];
        for (name, value) in rates {
            if value < 0.0 {
                return Err(ModelError::InvalidParameter {
                    name,
                    value,
                    reason: "rate coefficient must be non-negative",
                });
            }
        }
        Ok(())
    }
}

impl ModelParams for Parameters {
    const N_PARAMS: usize = N_PARAMS;
    const PARAM_NAMES: &'static [&'static str] = PARAM_NAMES;

    fn from_array(arr: &[f64]) -> Result<Self> {
        check_len(arr, Self::N_PARAMS, "parameter")?;
        Ok(Self {
            xk: arr[0],
            ingmax: arr[1],
            ae: arr[2],
            b: arr[3],
            br: arr[4],
            ing1: arr[5],
            ing2: arr[6],
            shell_coef: arr[7],
            shell_gam: arr[8],
            mg_o2_pom: arr[9],
            rgs1: arr[10],
            sm: arr[11],
            resp1: arr[12],
            resp2: arr[13],
            cms1: arr[14],
            cms2: arr[15],
        })
    }

    fn to_array(&self) -> Vec<f64> {
        vec![
            self.xk,
            self.ingmax,
            self.ae,
            self.b,
            self.br,
            self.ing1,
            self.ing2,
            self.shell_coef,
            self.shell_gam,
            self.mg_o2_pom,
            self.rgs1,
            self.sm,
            self.resp1,
            self.resp2,
            self.cms1,
            self.cms2,
        ]
    }
}
