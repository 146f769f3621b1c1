//! Structural normalization and canonical serialization.
//!
//! Canonical form = YAML rendering of the resource with every mapping's keys
//! sorted. Sequences keep their element order.

use crate::errors::KmdiffError;
use crate::model::Resource;
use serde_json::{Map, Value};

/// Recursively sort mapping keys; sequence order is preserved.
pub fn normalize_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), normalize_value(v)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.iter().map(normalize_value).collect()),
        other => other.clone(),
    }
}

/// Canonical text of a resource, used for comparison and line diffing.
///
/// # Errors
///
/// Returns `Serialization` if the resource cannot be rendered as YAML.
pub fn canonical_text(resource: &Resource) -> Result<String, KmdiffError> {
    let normalized = normalize_value(&resource.to_value()?);
    Ok(serde_yaml::to_string(&normalized)?)
}
