//! Manifest resource model.
//!
//! Only `apiVersion`, `kind`, `metadata.name` and `metadata.namespace` are
//! typed. Every other field, at the top level and inside `metadata`, is kept
//! verbatim in insertion order so it takes part in diffing.

use crate::errors::KmdiffError;
use crate::model::identity::DEFAULT_NAMESPACE;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single declarative manifest entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub kind: String,
    pub metadata: ResourceMetadata,
    /// Unknown top-level fields (`spec`, `data`, `status`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The `metadata` block of a resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Unknown metadata fields (`labels`, `annotations`, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource {
    /// Create a resource with no namespace and no extra fields
    pub fn new(
        api_version: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_version: api_version.into(),
            kind: kind.into(),
            metadata: ResourceMetadata {
                name: name.into(),
                namespace: None,
                extra: Map::new(),
            },
            extra: Map::new(),
        }
    }

    /// Set `metadata.namespace`
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.metadata.namespace = Some(namespace.into());
        self
    }

    /// Set an arbitrary top-level field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Set an arbitrary `metadata` field
    pub fn with_metadata_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.extra.insert(key.into(), value);
        self
    }

    /// Namespace used for identity and grouping
    ///
    /// Missing and empty namespaces both resolve to [`DEFAULT_NAMESPACE`].
    pub fn namespace_or_default(&self) -> &str {
        match self.metadata.namespace.as_deref() {
            Some(ns) if !ns.is_empty() => ns,
            _ => DEFAULT_NAMESPACE,
        }
    }

    /// Check that identity can be derived
    ///
    /// # Errors
    ///
    /// - `MissingKind` if `kind` is empty
    /// - `MissingName` if `metadata.name` is empty
    pub fn validate(&self) -> Result<(), KmdiffError> {
        if self.kind.trim().is_empty() {
            return Err(KmdiffError::MissingKind {
                name: self.metadata.name.clone(),
            });
        }
        if self.metadata.name.trim().is_empty() {
            return Err(KmdiffError::MissingName {
                kind: self.kind.clone(),
            });
        }
        Ok(())
    }

    /// Full resource as a generic JSON value, fields in source order
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if a field cannot be represented as JSON.
    pub fn to_value(&self) -> Result<Value, KmdiffError> {
        Ok(serde_json::to_value(self)?)
    }
}
