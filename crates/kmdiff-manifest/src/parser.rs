//! Manifest parser with validation
//!
//! Splits YAML text into documents and turns each non-empty document into a
//! validated [`Resource`]. Unknown fields are kept for diffing.

use crate::errors::{invalid_manifest, io_error, malformed_identity, Result};
use kmdiff_core::errors::KmdiffError;
use kmdiff_core::model::{Resource, ResourceIdentity, DEFAULT_NAMESPACE};
use kmdiff_core::{log_op_end, log_op_error, log_op_start};
use serde::Deserialize;
use serde_json::{Map, Value};
use serde_yaml::Value as YamlValue;
use std::fs;
use std::path::Path;
use std::time::Instant;

/// Read and parse a manifest file
///
/// # Errors
///
/// - `Io` if the file cannot be read as UTF-8 text
/// - `InvalidManifest` / `MalformedIdentity` as for [`parse_manifest_str`],
///   with the file path attached
pub fn load_manifest_file(path: &Path) -> Result<Vec<Resource>> {
    let started = Instant::now();
    let path_str = path.display().to_string();
    log_op_start!("load_manifest", path = %path_str);

    let loaded = fs::read_to_string(path)
        .map_err(|e| io_error("load_manifest", &path_str, e))
        .and_then(|content| {
            parse_manifest_str(&content).map_err(|e| e.with_path(path_str.clone()))
        });

    match loaded {
        Ok(resources) => {
            log_op_end!(
                "load_manifest",
                duration_ms = started.elapsed().as_millis() as u64,
                path = %path_str,
                document_count = resources.len(),
            );
            Ok(resources)
        }
        Err(err) => {
            log_op_error!(
                "load_manifest",
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64,
                path = %path_str,
            );
            Err(err)
        }
    }
}

/// Parse manifest text that may hold several `---` separated documents
///
/// Empty documents are skipped. Document indexes in errors are 1-based and
/// count every document in the stream.
///
/// # Errors
///
/// - `InvalidManifest` for YAML syntax errors, non-mapping documents, or a
///   missing/non-string `apiVersion`
/// - `MalformedIdentity` for a missing or empty `kind` or `metadata.name`
pub fn parse_manifest_str(content: &str) -> Result<Vec<Resource>> {
    let mut resources = Vec::new();

    for (idx, document) in serde_yaml::Deserializer::from_str(content).enumerate() {
        let number = idx + 1;
        let raw = YamlValue::deserialize(document)
            .map_err(|e| invalid_manifest(number, &format!("YAML parse error: {}", e)))?;
        if raw.is_null() {
            continue;
        }

        let value = yaml_to_json(raw).map_err(|reason| {
            invalid_manifest(number, &format!("unsupported YAML value: {}", reason))
        })?;
        resources.push(parse_resource(number, value)?);
    }

    tracing::debug!(
        op = "parse_manifest",
        document_count = resources.len(),
        "parsed manifest documents"
    );
    Ok(resources)
}

/// Convert a YAML value to JSON, turning scalar mapping keys into strings
///
/// Tags are dropped. Non-finite floats become `null`.
fn yaml_to_json(value: YamlValue) -> std::result::Result<Value, String> {
    Ok(match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map_or(Value::Null, Value::Number)
            }
        }
        YamlValue::String(s) => Value::String(s),
        YamlValue::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<std::result::Result<Vec<_>, String>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::new();
            for (key, value) in mapping {
                object.insert(mapping_key(key)?, yaml_to_json(value)?);
            }
            Value::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    })
}

fn mapping_key(key: YamlValue) -> std::result::Result<String, String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => {
            Err("mapping keys must be scalars".to_string())
        }
    }
}

/// Validate one document and convert it into a resource
fn parse_resource(number: usize, value: Value) -> Result<Resource> {
    let Value::Object(map) = &value else {
        return Err(invalid_manifest(
            number,
            &format!("document is not a mapping (found {})", type_name(&value)),
        ));
    };

    match map.get("apiVersion") {
        Some(Value::String(_)) => {}
        Some(other) => {
            return Err(invalid_manifest(
                number,
                &format!("apiVersion must be a string (found {})", type_name(other)),
            ))
        }
        None => return Err(invalid_manifest(number, "missing apiVersion")),
    }

    let (name, namespace) = match map.get("metadata") {
        None | Some(Value::Null) => (None, None),
        Some(Value::Object(metadata)) => (
            metadata.get("name"),
            metadata
                .get("namespace")
                .and_then(Value::as_str)
                .filter(|ns| !ns.is_empty()),
        ),
        Some(other) => {
            return Err(invalid_manifest(
                number,
                &format!("metadata must be a mapping (found {})", type_name(other)),
            ))
        }
    };

    let kind = required_identity_field(number, map.get("kind"), "kind")?;
    let name = required_identity_field(number, name, "metadata.name")?;
    let identity = ResourceIdentity::new(namespace.unwrap_or(DEFAULT_NAMESPACE), &*kind, &*name);
    if kind.is_empty() {
        return Err(malformed_identity(number, &identity, KmdiffError::MissingKind { name }));
    }
    if name.is_empty() {
        return Err(malformed_identity(number, &identity, KmdiffError::MissingName { kind }));
    }

    let resource: Resource = serde_json::from_value(value)
        .map_err(|e| invalid_manifest(number, &format!("invalid resource: {}", e)))?;
    resource
        .validate()
        .map_err(|e| malformed_identity(number, &identity, e))?;

    Ok(resource)
}

/// Missing or null identity fields read as empty; any other non-string is invalid
fn required_identity_field(number: usize, value: Option<&Value>, field: &str) -> Result<String> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(other) => Err(invalid_manifest(
            number,
            &format!("{} must be a string (found {})", field, type_name(other)),
        )),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kmdiff_core::errors::ExErrorKind;

    #[test]
    fn test_parse_single_document() {
        let yaml = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: my-config
  namespace: default
data:
  key: value
"#;

        let resources = parse_manifest_str(yaml).unwrap();
        assert_eq!(resources.len(), 1);
        assert_eq!(resources[0].kind, "ConfigMap");
        assert_eq!(resources[0].metadata.name, "my-config");
        assert_eq!(resources[0].namespace_or_default(), "default");
    }

    #[test]
    fn test_reject_sequence_document() {
        let err = parse_manifest_str("- a\n- b\n").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidManifest);
        assert!(err.to_string().contains("not a mapping"));
    }

    #[test]
    fn test_reject_missing_api_version() {
        let yaml = "kind: Service\nmetadata:\n  name: api\n";
        let err = parse_manifest_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidManifest);
        assert!(err.message().contains("apiVersion"));
    }

    #[test]
    fn test_empty_name_is_malformed_identity() {
        let yaml = "apiVersion: v1\nkind: Service\nmetadata:\n  name: \"\"\n";
        let err = parse_manifest_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::MalformedIdentity);
        assert_eq!(err.document(), Some(1));
    }

    #[test]
    fn test_numeric_name_is_invalid_manifest() {
        let yaml = "apiVersion: v1\nkind: Service\nmetadata:\n  name: 42\n";
        let err = parse_manifest_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidManifest);
        assert!(err.message().contains("metadata.name"));
    }

    #[test]
    fn test_scalar_keys_become_strings() {
        let yaml = "apiVersion: v1\nkind: Service\nmetadata:\n  name: web\ndata:\n  8080: http\n  true: yes\n  1.5: half\n";
        let resources = parse_manifest_str(yaml).unwrap();
        assert_eq!(
            resources[0].extra["data"],
            serde_json::json!({"8080": "http", "true": "yes", "1.5": "half"})
        );
    }

    #[test]
    fn test_sequence_key_is_invalid_manifest() {
        let yaml = "apiVersion: v1\nkind: Service\nmetadata:\n  name: web\ndata:\n  ? [a, b]\n  : pair\n";
        let err = parse_manifest_str(yaml).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidManifest);
        assert!(err.message().contains("mapping keys must be scalars"));
    }

    #[test]
    fn test_malformed_identity_names_partial_identity() {
        let yaml = "apiVersion: v1\nkind: Service\nmetadata:\n  namespace: prod\n";
        let err = parse_manifest_str(yaml).unwrap_err();
        assert_eq!(err.identity(), Some("prod/Service/"));
        assert!(err.to_string().contains("(identity: prod/Service/)"));
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&Value::Null), "null");
        assert_eq!(type_name(&serde_json::json!([1])), "sequence");
        assert_eq!(type_name(&serde_json::json!({})), "mapping");
    }
}
