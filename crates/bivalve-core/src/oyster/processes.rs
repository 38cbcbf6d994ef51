//! Oyster energy-budget process functions.
//!
//! Pure functions for each term of one step of the budget. All inputs and
//! outputs are f64; rates are per day unless noted.

use super::constants::{ABSORPTION_DIVISOR, RESPIRATION_DIVISOR};
use super::params::Parameters;
use super::policy::{GrowthCeilingPolicy, SpawningPolicy};

/// Michaelis–Menten functional response: f = X / (X + xk).
pub fn functional_response(food: f64, xk: f64) -> f64 {
    food / (food + xk)
}

/// Temperature penalty on ingestion: INGtemp = Ing1 · (TEMP − Ing2)².
pub fn ingestion_temperature_effect(temperature: f64, ing1: f64, ing2: f64) -> f64 {
    let d = temperature - ing2;
    ing1 * d * d
}

/// Organic ingestion: INGorg = (Ingmax − INGtemp) · f · SOMA^b [mg h⁻¹].
pub fn organic_ingestion(ingmax: f64, ing_temp: f64, f: f64, soma: f64, b: f64) -> f64 {
    (ingmax - ing_temp) * f * soma.powf(b)
}

/// Organic absorption: ABSorg = ae · INGorg / 1000.24 [g d⁻¹].
pub fn organic_absorption(ae: f64, ing_org: f64) -> f64 {
    (ae * ing_org) / ABSORPTION_DIVISOR
}

/// Maximal somatic growth rate for the current SOMA [g d⁻¹].
pub fn growth_ceiling(policy: GrowthCeilingPolicy, soma: f64, params: &Parameters) -> f64 {
    match policy {
        GrowthCeilingPolicy::Constant => params.cms2,
        GrowthCeilingPolicy::SizeDependent if soma < params.sm => params.cms1,
        GrowthCeilingPolicy::SizeDependent => params.cms2,
    }
}

/// Respiration: RESP = resp1^(resp2 · TEMP) · SOMA^br · mgO2pom / (1000 · 24) [g d⁻¹].
pub fn respiration(temperature: f64, soma: f64, params: &Parameters) -> f64 {
    (params.resp1.powf(params.resp2 * temperature) * soma.powf(params.br) * params.mg_o2_pom)
        / RESPIRATION_DIVISOR
}

/// Shell gain: Shellcoef · ABSorg · Shellgam, or zero when absorption does
/// not cover respiration.
pub fn shell_gain(abs_org: f64, resp: f64, shell_coef: f64, shell_gam: f64) -> f64 {
    if abs_org < resp {
        return 0.0;
    }
    (shell_coef * abs_org) * shell_gam
}

/// Somatic gain: min(maxSOMA, ABSorg − SHELLgain) − RESP. Negative under
/// starvation; not floored.
pub fn soma_gain(max_soma: f64, abs_org: f64, shell_gain: f64, resp: f64) -> f64 {
    max_soma.min(abs_org - shell_gain) - resp
}

/// Reserve/gonad gain: the residual ABSorg − SHELLgain − SOMAgain.
pub fn resgon_gain(abs_org: f64, shell_gain: f64, soma_gain: f64) -> f64 {
    abs_org - shell_gain - soma_gain
}

/// Mass released by spawning at the start of a step [g].
pub fn spawning_release(policy: SpawningPolicy, resgon: f64, biomass: f64, rgs1: f64) -> f64 {
    match policy {
        SpawningPolicy::None => 0.0,
        SpawningPolicy::ThresholdBased if biomass > 0.0 && resgon / biomass >= rgs1 => resgon,
        SpawningPolicy::ThresholdBased => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert two f64 values are close.
    fn assert_approx(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() < tol,
            "expected {expected} ± {tol}, got {actual}"
        );
    }

    // -- Feeding --

    #[test]
    fn functional_response_half_saturation() {
        assert_approx(functional_response(0.5, 0.5), 0.5, 1e-15);
        assert_eq!(functional_response(0.0, 0.5), 0.0);
    }

    #[test]
    fn functional_response_saturates() {
        assert!(functional_response(1e6, 0.5) > 0.999);
    }

    #[test]
    fn temperature_effect_is_zero_at_optimum() {
        assert_eq!(ingestion_temperature_effect(19.0, 0.06, 19.0), 0.0);
        assert_approx(ingestion_temperature_effect(20.0, 0.06, 19.0), 0.06, 1e-15);
        assert_approx(ingestion_temperature_effect(17.0, 0.06, 19.0), 0.24, 1e-12);
    }

    #[test]
    fn ingestion_first_step_value() {
        let ing = organic_ingestion(22.0, 0.06, 0.5, 0.3, 0.66);
        assert_approx(ing, 4.955718802878045, 1e-9);
    }

    #[test]
    fn absorption_first_step_value() {
        let abs = organic_absorption(0.25, 4.955718802878045);
        assert_approx(abs, 0.0012386324289365665, 1e-12);
    }

    // -- Growth ceiling --

    #[test]
    fn constant_ceiling_ignores_size() {
        let p = Parameters::default();
        assert_eq!(growth_ceiling(GrowthCeilingPolicy::Constant, 0.1, &p), p.cms2);
        assert_eq!(growth_ceiling(GrowthCeilingPolicy::Constant, 5.0, &p), p.cms2);
    }

    #[test]
    fn size_dependent_ceiling_switches_at_sm() {
        let p = Parameters::default();
        let policy = GrowthCeilingPolicy::SizeDependent;
        assert_eq!(growth_ceiling(policy, 1.49, &p), p.cms1);
        assert_eq!(growth_ceiling(policy, 1.5, &p), p.cms2);
    }

    // -- Respiration --

    #[test]
    fn respiration_first_step_value() {
        let resp = respiration(20.0, 0.3, &Parameters::default());
        assert_approx(resp, 4.4529087278878723e-07, 1e-18);
    }

    #[test]
    fn respiration_grows_with_soma() {
        let p = Parameters::default();
        assert!(respiration(20.0, 2.0, &p) > respiration(20.0, 1.0, &p));
    }

    // -- Allocation --

    #[test]
    fn shell_gain_clamped_under_starvation() {
        assert_eq!(shell_gain(1e-7, 1e-6, 0.05, 0.5), 0.0);
        assert_approx(shell_gain(1e-3, 1e-6, 0.05, 0.5), 2.5e-5, 1e-18);
    }

    #[test]
    fn shell_gain_at_break_even_is_not_clamped() {
        assert!(shell_gain(1e-6, 1e-6, 0.05, 0.5) > 0.0);
    }

    #[test]
    fn soma_gain_capped_by_ceiling() {
        assert_approx(soma_gain(0.044, 1.0, 0.0, 0.001), 0.043, 1e-15);
    }

    #[test]
    fn soma_gain_negative_under_starvation() {
        assert!(soma_gain(0.044, 0.0, 0.0, 1e-4) < 0.0);
    }

    #[test]
    fn allocation_conserves_absorption() {
        // ABSorg = SHELLgain + SOMAgain + RESGONgain
        let abs = 0.002;
        let resp = 5e-7;
        let sg = shell_gain(abs, resp, 0.05, 0.5);
        let somag = soma_gain(0.044, abs, sg, resp);
        let rg = resgon_gain(abs, sg, somag);
        assert_approx(sg + somag + rg, abs, 1e-15);
    }

    // -- Spawning --

    #[test]
    fn no_spawning_policy_releases_nothing() {
        assert_eq!(spawning_release(SpawningPolicy::None, 0.9, 1.0, 0.2), 0.0);
    }

    #[test]
    fn threshold_spawning_releases_whole_pool() {
        let policy = SpawningPolicy::ThresholdBased;
        assert_eq!(spawning_release(policy, 0.3, 1.0, 0.2), 0.3);
        assert_eq!(spawning_release(policy, 0.1, 1.0, 0.2), 0.0);
    }

    #[test]
    fn threshold_spawning_needs_positive_biomass() {
        assert_eq!(spawning_release(SpawningPolicy::ThresholdBased, 0.0, 0.0, 0.2), 0.0);
    }
}
