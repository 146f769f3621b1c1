use kmdiff_core::Resource;
use serde_json::{json, Value};

/// Build a resource from a JSON literal
#[allow(dead_code)]
pub fn resource(value: Value) -> Resource {
    serde_json::from_value(value).expect("test resource must deserialize")
}

/// ConfigMap with a single `data.key` entry
#[allow(dead_code)]
pub fn config_map(namespace: &str, name: &str, value: &str) -> Resource {
    resource(json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": {"name": name, "namespace": namespace},
        "data": {"key": value}
    }))
}

/// Minimal resource of any kind
#[allow(dead_code)]
pub fn bare(namespace: &str, kind: &str, name: &str) -> Resource {
    resource(json!({
        "apiVersion": "v1",
        "kind": kind,
        "metadata": {"name": name, "namespace": namespace}
    }))
}
