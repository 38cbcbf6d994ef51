//! Switchable model behaviours.
//!
//! Each policy defaults to the behaviour of the published model run:
//! a constant growth ceiling, no spawning, and a hard stop when somatic
//! mass goes negative.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// How the maximal somatic growth rate `maxSOMA` is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthCeilingPolicy {
    /// Always `cms2`.
    #[default]
    Constant,
    /// `cms1` while SOMA < `sm`, `cms2` afterwards.
    SizeDependent,
}

/// Whether reserve/gonad mass is released by spawning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpawningPolicy {
    /// Pure growth allocation.
    #[default]
    None,
    /// Release the whole RESGON pool once RESGON / B reaches `Rgs1`.
    ThresholdBased,
}

/// What to do when SOMA is negative at the start of a step.
///
/// Negative SOMA raised to the fractional exponents `b` and `br` is NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeMassPolicy {
    /// Fail with `ModelError::NegativeMass`.
    #[default]
    Reject,
    /// Keep integrating; NaN spreads through the remaining series.
    Propagate,
}

/// The full set of switchable behaviours for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Policies {
    pub growth_ceiling: GrowthCeilingPolicy,
    pub spawning: SpawningPolicy,
    pub negative_mass: NegativeMassPolicy,
}

macro_rules! policy_names {
    ($ty:ty, $kind:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(ModelError::UnknownPolicy {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

policy_names!(GrowthCeilingPolicy, "growth ceiling", {
    Constant => "constant",
    SizeDependent => "size_dependent",
});

policy_names!(SpawningPolicy, "spawning", {
    None => "none",
    ThresholdBased => "threshold_based",
});

policy_names!(NegativeMassPolicy, "negative mass", {
    Reject => "reject",
    Propagate => "propagate",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_published_run() {
        let p = Policies::default();
        assert_eq!(p.growth_ceiling, GrowthCeilingPolicy::Constant);
        assert_eq!(p.spawning, SpawningPolicy::None);
        assert_eq!(p.negative_mass, NegativeMassPolicy::Reject);
    }

    #[test]
    fn parse_accepts_kebab_and_snake_case() {
        assert_eq!(
            "size-dependent".parse::<GrowthCeilingPolicy>().unwrap(),
            GrowthCeilingPolicy::SizeDependent
        );
        assert_eq!(
            "threshold_based".parse::<SpawningPolicy>().unwrap(),
            SpawningPolicy::ThresholdBased
        );
        assert_eq!(
            "Propagate".parse::<NegativeMassPolicy>().unwrap(),
            NegativeMassPolicy::Propagate
        );
    }

    #[test]
    fn parse_rejects_unknown_name() {
        let err = "sometimes".parse::<SpawningPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "unknown spawning policy `sometimes`");
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for p in [GrowthCeilingPolicy::Constant, GrowthCeilingPolicy::SizeDependent] {
            assert_eq!(p.to_string().parse::<GrowthCeilingPolicy>().unwrap(), p);
        }
    }
}
