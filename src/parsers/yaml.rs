//! YAML decoding into the document tree.

use crate::error::Result;
use serde::Deserialize;
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;

/// Decode YAML content.
///
/// Only the first document of a multi-document stream is used. An empty or
/// null document decodes to an empty mapping.
pub fn parse_yaml(content: &str) -> Result<Value> {
    let Some(first) = serde_yaml::Deserializer::from_str(content).next() else {
        return Ok(Value::Object(Map::new()));
    };
    let raw = YamlValue::deserialize(first)?;
    Ok(match yaml_to_json(raw) {
        Value::Null => Value::Object(Map::new()),
        other => other,
    })
}

fn yaml_to_json(value: YamlValue) -> Value {
    match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => number_to_json(&n),
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (key_to_string(k), yaml_to_json(v)))
                .collect(),
        ),
        YamlValue::Tagged(tagged) => {
            let inner = *tagged;
            yaml_to_json(inner.value)
        }
    }
}

/// Non-finite floats (`.inf`, `.nan`) have no JSON form and are kept as text.
fn number_to_json(n: &serde_yaml::Number) -> Value {
    if let Some(i) = n.as_i64() {
        Value::from(i)
    } else if let Some(u) = n.as_u64() {
        Value::from(u)
    } else {
        n.as_f64()
            .and_then(serde_json::Number::from_f64)
            .map_or_else(|| Value::String(n.to_string()), Value::Number)
    }
}

fn key_to_string(key: YamlValue) -> String {
    match key {
        YamlValue::String(s) => s,
        YamlValue::Null => "null".to_string(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Number(n) => n.to_string(),
        other => yaml_to_json(other).to_string(),
    }
}
