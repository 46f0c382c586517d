//! JSON support backed by `serde_json`.

use serde_json::{Map, Value as JsonValue};
use whisker_core::{
    find_entry, FormatSupport, GetterRegistry, Lookup, Mapping, Number, Value, CURRENT,
};

use crate::temporal::string_value;

/// Registers getters for `serde_json::Value`, `serde_json::Map` and
/// [`JsonProperty`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormat;

impl FormatSupport for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn register(&self, registry: &mut GetterRegistry) {
        registry.register::<JsonValue, _>(get_value);
        registry.register::<Map<String, JsonValue>, _>(get_object);
        registry.register::<JsonProperty, _>(get_property);
    }
}

/// A single named JSON property, detached from its object.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonProperty {
    name: String,
    value: JsonValue,
}

impl JsonProperty {
    pub fn new(name: impl Into<String>, value: JsonValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Copy the property `name` out of `object`.
    pub fn from_object(object: &Map<String, JsonValue>, name: &str) -> Option<Self> {
        object.get(name).map(|value| Self::new(name, value.clone()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &JsonValue {
        &self.value
    }
}

/// Classify a JSON node into the value model.
pub fn classify(node: &JsonValue) -> Value {
    match node {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(n) => Value::Number(classify_number(n)),
        JsonValue::String(s) => string_value(s),
        JsonValue::Array(items) => Value::Sequence(items.iter().map(classify).collect()),
        JsonValue::Object(map) => Value::Mapping(classify_object(map)),
    }
}

/// Integral literals stay integers as long as they fit in `i128`; numbers
/// keep their source text, so nothing is rounded on the way.
fn classify_number(n: &serde_json::Number) -> Number {
    let literal = n.to_string();
    if !literal.contains(['.', 'e', 'E']) {
        if let Ok(i) = literal.parse::<i128>() {
            return Number::Integer(i);
        }
    }
    Number::Float(n.as_f64().unwrap_or(f64::NAN))
}

fn classify_object(map: &Map<String, JsonValue>) -> Mapping {
    map.iter().map(|(k, v)| (k.as_str(), classify(v))).collect()
}

/// Getter for any JSON node. Only objects have named keys.
pub fn get_value(node: &JsonValue, key: &str, ignore_case: bool) -> Lookup {
    if key == CURRENT {
        return Lookup::from_value(classify(node));
    }
    match node {
        JsonValue::Object(map) => get_object(map, key, ignore_case),
        _ => Lookup::NotFound,
    }
}

/// Getter for JSON objects.
pub fn get_object(map: &Map<String, JsonValue>, key: &str, ignore_case: bool) -> Lookup {
    if key == CURRENT {
        return Lookup::Found(Value::Mapping(classify_object(map)));
    }
    find_entry(map.iter().map(|(k, v)| (k.as_str(), v)), key, ignore_case)
        .map_or(Lookup::NotFound, |v| Lookup::from_value(classify(v)))
}

/// Getter for a lone property: only its own name matches.
pub fn get_property(property: &JsonProperty, key: &str, ignore_case: bool) -> Lookup {
    let matches = key == CURRENT || find_entry([(property.name(), ())], key, ignore_case).is_some();
    if matches {
        Lookup::from_value(classify(property.value()))
    } else {
        Lookup::NotFound
    }
}
