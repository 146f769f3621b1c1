//! Resource identity: the `(namespace, kind, name)` key.

use crate::model::resource::Resource;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Namespace assumed for resources that do not declare one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Key addressing one resource across the two compared sides.
///
/// Field order matters: the derived `Ord` compares namespace, then kind,
/// then name, byte-wise. Grouping relies on that order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceIdentity {
    pub namespace: String,
    pub kind: String,
    pub name: String,
}

impl ResourceIdentity {
    /// Build an identity from its parts
    pub fn new(
        namespace: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Derive the identity of a resource, defaulting a missing namespace
    pub fn of(resource: &Resource) -> Self {
        Self::new(
            resource.namespace_or_default(),
            resource.kind.as_str(),
            resource.metadata.name.as_str(),
        )
    }

    /// The `namespace/kind/name` key string
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.namespace, self.kind, self.name)
    }
}
