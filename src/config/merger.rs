//! Deep merge of YAML configuration values.
//!
//! A project's `.sandenv/config.local.yml` is layered over
//! `.sandenv/config.yml` before it is parsed.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively, so a local file can add a single
//!   `environment` entry without repeating the others
//! - Sequences (`volumes`, `passthrough`) are replaced entirely
//! - A `null` in the overlay removes the key from the base
//! - Scalars in the overlay replace scalars in the base

use serde_yaml::{Mapping, Value};

/// Deep merge `overlay` onto `base`.
///
/// # Example
///
/// ```
/// use sandenv::config::deep_merge;
///
/// let base: serde_yaml::Value =
///     serde_yaml::from_str("environment: {A: '1', B: '2'}").unwrap();
/// let local: serde_yaml::Value =
///     serde_yaml::from_str("environment: {B: null, C: '3'}").unwrap();
///
/// let merged = deep_merge(&base, &local);
/// assert_eq!(merged["environment"]["A"], "1");
/// assert!(merged["environment"].get("B").is_none());
/// assert_eq!(merged["environment"]["C"], "3");
/// ```
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            Value::Mapping(merge_mappings(base_map, overlay_map))
        }
        (_, overlay) => overlay.clone(),
    }
}

fn merge_mappings(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = base.clone();

    for (key, value) in overlay {
        if value.is_null() {
            merged.remove(key);
            continue;
        }
        let next = match base.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        merged.insert(key.clone(), next);
    }

    merged
}

/// Merge configs in order; later entries take precedence.
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .fold(Value::Mapping(Mapping::new()), |acc, config| {
            deep_merge(&acc, config)
        })
}
