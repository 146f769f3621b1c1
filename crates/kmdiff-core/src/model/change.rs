//! Change records and the grouped diff result.

use crate::model::identity::ResourceIdentity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single change
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

impl ChangeType {
    /// Capitalized label used in rendered output
    pub fn label(&self) -> &'static str {
        match self {
            ChangeType::Added => "Added",
            ChangeType::Removed => "Removed",
            ChangeType::Modified => "Modified",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How one resource identity changed between the old and new side.
///
/// Unchanged resources have no record. `diff_text` of a `Modified` record is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChangeRecord {
    Added {
        kind: String,
        name: String,
        namespace: String,
    },
    Removed {
        kind: String,
        name: String,
        namespace: String,
    },
    Modified {
        kind: String,
        name: String,
        namespace: String,
        #[serde(rename = "diffText")]
        diff_text: String,
    },
}

impl ChangeRecord {
    /// Record for an identity present only on the new side
    pub fn added(identity: &ResourceIdentity) -> Self {
        ChangeRecord::Added {
            kind: identity.kind.clone(),
            name: identity.name.clone(),
            namespace: identity.namespace.clone(),
        }
    }

    /// Record for an identity present only on the old side
    pub fn removed(identity: &ResourceIdentity) -> Self {
        ChangeRecord::Removed {
            kind: identity.kind.clone(),
            name: identity.name.clone(),
            namespace: identity.namespace.clone(),
        }
    }

    /// Record for an identity whose canonical form changed
    pub fn modified(identity: &ResourceIdentity, diff_text: impl Into<String>) -> Self {
        ChangeRecord::Modified {
            kind: identity.kind.clone(),
            name: identity.name.clone(),
            namespace: identity.namespace.clone(),
            diff_text: diff_text.into(),
        }
    }

    pub fn change_type(&self) -> ChangeType {
        match self {
            ChangeRecord::Added { .. } => ChangeType::Added,
            ChangeRecord::Removed { .. } => ChangeType::Removed,
            ChangeRecord::Modified { .. } => ChangeType::Modified,
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            ChangeRecord::Added { kind, .. }
            | ChangeRecord::Removed { kind, .. }
            | ChangeRecord::Modified { kind, .. } => kind,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ChangeRecord::Added { name, .. }
            | ChangeRecord::Removed { name, .. }
            | ChangeRecord::Modified { name, .. } => name,
        }
    }

    pub fn namespace(&self) -> &str {
        match self {
            ChangeRecord::Added { namespace, .. }
            | ChangeRecord::Removed { namespace, .. }
            | ChangeRecord::Modified { namespace, .. } => namespace,
        }
    }

    /// Line diff of a modified resource; `None` for added/removed
    pub fn diff_text(&self) -> Option<&str> {
        match self {
            ChangeRecord::Modified { diff_text, .. } => Some(diff_text),
            _ => None,
        }
    }

    /// Identity this record refers to
    pub fn identity(&self) -> ResourceIdentity {
        ResourceIdentity::new(self.namespace(), self.kind(), self.name())
    }
}

/// All changes within one namespace, ordered by `(kind, name)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceDiff {
    pub namespace: String,
    pub diffs: Vec<ChangeRecord>,
}

/// Namespace-partitioned changes, ordered by namespace.
///
/// Serializes as a bare JSON array of [`NamespaceDiff`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiffResult {
    namespaces: Vec<NamespaceDiff>,
}

impl DiffResult {
    /// Wrap already-ordered namespace groups
    pub fn new(namespaces: Vec<NamespaceDiff>) -> Self {
        Self { namespaces }
    }

    /// True when no resource changed
    pub fn is_empty(&self) -> bool {
        self.namespaces.iter().all(|ns| ns.diffs.is_empty())
    }

    pub fn namespaces(&self) -> &[NamespaceDiff] {
        &self.namespaces
    }

    /// All records in output order
    pub fn records(&self) -> impl Iterator<Item = &ChangeRecord> {
        self.namespaces.iter().flat_map(|ns| ns.diffs.iter())
    }

    /// Total number of change records
    pub fn change_count(&self) -> usize {
        self.namespaces.iter().map(|ns| ns.diffs.len()).sum()
    }

    /// Number of records of one change type
    pub fn count_of(&self, change_type: ChangeType) -> usize {
        self.records()
            .filter(|r| r.change_type() == change_type)
            .count()
    }
}

impl<'a> IntoIterator for &'a DiffResult {
    type Item = &'a NamespaceDiff;
    type IntoIter = std::slice::Iter<'a, NamespaceDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.namespaces.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn id() -> ResourceIdentity {
        ResourceIdentity::new("default", "ConfigMap", "my-config")
    }

    #[test]
    fn test_added_serializes_with_type_tag() {
        let value = serde_json::to_value(ChangeRecord::added(&id())).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "added",
                "kind": "ConfigMap",
                "name": "my-config",
                "namespace": "default"
            })
        );
    }

    #[test]
    fn test_modified_serializes_diff_text_in_camel_case() {
        let value = serde_json::to_value(ChangeRecord::modified(&id(), "-a\n+b")).unwrap();
        assert_eq!(value["type"], "modified");
        assert_eq!(value["diffText"], "-a\n+b");
    }

    #[test]
    fn test_accessors() {
        let r = ChangeRecord::modified(&id(), " x");
        assert_eq!(r.change_type(), ChangeType::Modified);
        assert_eq!(r.kind(), "ConfigMap");
        assert_eq!(r.name(), "my-config");
        assert_eq!(r.namespace(), "default");
        assert_eq!(r.diff_text(), Some(" x"));
        assert_eq!(r.identity(), id());
        assert_eq!(ChangeRecord::removed(&id()).diff_text(), None);
    }

    #[test]
    fn test_change_type_labels_are_capitalized() {
        assert_eq!(ChangeType::Added.to_string(), "Added");
        assert_eq!(ChangeType::Removed.to_string(), "Removed");
        assert_eq!(ChangeType::Modified.to_string(), "Modified");
    }

    #[test]
    fn test_diff_result_is_transparent_array() {
        let result = DiffResult::new(vec![NamespaceDiff {
            namespace: "default".to_string(),
            diffs: vec![ChangeRecord::added(&id())],
        }]);
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["namespace"], "default");

        let back: DiffResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.change_count(), 1);
        assert_eq!(back.count_of(ChangeType::Added), 1);
    }

    #[test]
    fn test_empty_result() {
        let result = DiffResult::default();
        assert!(result.is_empty());
        assert_eq!(result.change_count(), 0);
        assert_eq!(serde_json::to_string(&result).unwrap(), "[]");
    }
}
