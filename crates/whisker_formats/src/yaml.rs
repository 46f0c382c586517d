//! YAML support backed by `serde_yaml`.
//!
//! Only string keys are addressable; entries with other key types are
//! skipped both by lookups and by classification.

use serde_yaml::{Mapping as YamlMapping, Value as YamlValue};
use whisker_core::{
    find_entry, FormatSupport, GetterRegistry, Lookup, Mapping, Number, Value, CURRENT,
};

use crate::temporal::string_value;

/// Registers getters for `serde_yaml::Value` and `serde_yaml::Mapping`.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlFormat;

impl FormatSupport for YamlFormat {
    fn name(&self) -> &str {
        "yaml"
    }

    fn register(&self, registry: &mut GetterRegistry) {
        registry.register::<YamlValue, _>(get_value);
        registry.register::<YamlMapping, _>(get_mapping);
    }
}

/// Classify a YAML node into the value model.
///
/// Tagged nodes classify as their inner value.
pub fn classify(node: &YamlValue) -> Value {
    match node {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(*b),
        YamlValue::Number(n) => Value::Number(classify_number(n)),
        YamlValue::String(s) => string_value(s),
        YamlValue::Sequence(items) => Value::Sequence(items.iter().map(classify).collect()),
        YamlValue::Mapping(map) => Value::Mapping(classify_mapping(map)),
        YamlValue::Tagged(tagged) => classify(&tagged.value),
    }
}

fn classify_number(n: &serde_yaml::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::Integer(i.into())
    } else if let Some(u) = n.as_u64() {
        Number::Integer(u.into())
    } else {
        Number::Float(n.as_f64().unwrap_or(f64::NAN))
    }
}

fn string_entries(map: &YamlMapping) -> impl Iterator<Item = (&str, &YamlValue)> {
    map.iter().filter_map(|(k, v)| k.as_str().map(|k| (k, v)))
}

fn classify_mapping(map: &YamlMapping) -> Mapping {
    string_entries(map).map(|(k, v)| (k, classify(v))).collect()
}

/// Getter for any YAML node. Only mappings have named keys.
pub fn get_value(node: &YamlValue, key: &str, ignore_case: bool) -> Lookup {
    if key == CURRENT {
        return Lookup::from_value(classify(node));
    }
    match node {
        YamlValue::Mapping(map) => get_mapping(map, key, ignore_case),
        YamlValue::Tagged(tagged) => get_value(&tagged.value, key, ignore_case),
        _ => Lookup::NotFound,
    }
}

/// Getter for YAML mappings.
pub fn get_mapping(map: &YamlMapping, key: &str, ignore_case: bool) -> Lookup {
    if key == CURRENT {
        return Lookup::Found(Value::Mapping(classify_mapping(map)));
    }
    find_entry(string_entries(map), key, ignore_case)
        .map_or(Lookup::NotFound, |v| Lookup::from_value(classify(v)))
}
