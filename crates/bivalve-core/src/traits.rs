//! Parameter-set contract.
//!
//! A parameter set has a flat `f64` layout in a fixed name order, so it can be
//! rebuilt from the name→value tables found in TOML documents and Python dicts.
use std::collections::BTreeMap;

use crate::error::{ModelError, Result};

/// Calibrated parameter set with a fixed, named layout.
pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];

    /// Build from values in `PARAM_NAMES` order.
    fn from_array(arr: &[f64]) -> Result<Self>;

    /// Values in `PARAM_NAMES` order.
    fn to_array(&self) -> Vec<f64>;

    /// Build from a name→value table. Every name is required, unknown names
    /// are rejected, and no default is substituted.
    fn from_map(map: &BTreeMap<String, f64>) -> Result<Self> {
        let arr = ordered_values(map, Self::PARAM_NAMES, "parameter")?;
        Self::from_array(&arr)
    }

    /// Name→value table in `PARAM_NAMES` order.
    fn to_map(&self) -> BTreeMap<String, f64> {
        Self::PARAM_NAMES
            .iter()
            .map(|n| n.to_string())
            .zip(self.to_array())
            .collect()
    }
}

/// Pull `names` out of `map` in order, failing on the first absent name and
/// on any name not listed.
pub(crate) fn ordered_values(
    map: &BTreeMap<String, f64>,
    names: &[&str],
    table: &'static str,
) -> Result<Vec<f64>> {
    if let Some(unknown) = map.keys().find(|k| !names.contains(&k.as_str())) {
        return Err(ModelError::unknown_key(table, unknown.as_str()));
    }
    names
        .iter()
        .map(|&name| {
            map.get(name)
                .copied()
                .ok_or_else(|| ModelError::missing_key(table, name))
        })
        .collect()
}

/// Reject arrays whose length does not match the layout.
pub(crate) fn check_len(arr: &[f64], expected: usize, what: &str) -> Result<()> {
    if arr.len() != expected {
        return Err(ModelError::invalid_config(format!(
            "expected {} {} elements, got {}",
            expected,
            what,
            arr.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn ordered_values_follows_name_order() {
        let map = table(&[("b", 2.0), ("a", 1.0)]);
        let v = ordered_values(&map, &["b", "a"], "test").unwrap();
        assert_eq!(v, vec![2.0, 1.0]);
    }

    #[test]
    fn ordered_values_reports_missing_key() {
        let map = table(&[("a", 1.0)]);
        let err = ordered_values(&map, &["a", "b"], "test").unwrap_err();
        assert_eq!(err, ModelError::missing_key("test", "b"));
    }

    #[test]
    fn ordered_values_rejects_unknown_key() {
        let map = table(&[("a", 1.0), ("z", 0.0)]);
        let err = ordered_values(&map, &["a"], "test").unwrap_err();
        assert_eq!(err, ModelError::unknown_key("test", "z"));
    }

    #[test]
    fn check_len_mismatch() {
        assert!(check_len(&[1.0, 2.0], 3, "parameter").is_err());
        assert!(check_len(&[1.0, 2.0, 3.0], 3, "parameter").is_ok());
    }
}
