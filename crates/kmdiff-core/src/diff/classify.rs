//! Change classification over two identity indexes.

use crate::diff::index::ResourceIndex;
use crate::diff::line_diff::line_diff;
use crate::diff::normalize::canonical_text;
use crate::errors::KmdiffError;
use crate::model::{ChangeRecord, Resource, ResourceIdentity};
use std::collections::BTreeSet;

/// Classify every identity present on either side.
///
/// - only in `old`: `Removed`
/// - only in `new`: `Added`
/// - in both with different canonical text: `Modified` with a line diff
/// - in both with equal canonical text: no record
///
/// Records come back in identity order; callers that need the grouped order
/// pass them through [`group_changes`](crate::diff::group::group_changes).
///
/// # Errors
///
/// Returns `Serialization` if a resource cannot be rendered canonically.
pub fn classify_changes(
    old: &ResourceIndex<'_>,
    new: &ResourceIndex<'_>,
) -> Result<Vec<ChangeRecord>, KmdiffError> {
    let identities: BTreeSet<&ResourceIdentity> = old.keys().chain(new.keys()).collect();

    let mut records = Vec::new();
    for identity in identities {
        match (old.get(identity), new.get(identity)) {
            (Some(_), None) => records.push(ChangeRecord::removed(identity)),
            (None, Some(_)) => records.push(ChangeRecord::added(identity)),
            (Some(a), Some(b)) => {
                if let Some(diff_text) = modification(a, b)? {
                    records.push(ChangeRecord::modified(identity, diff_text));
                }
            }
            (None, None) => {}
        }
    }
    Ok(records)
}

/// Line diff between two versions, or `None` when canonically equal
fn modification(old: &Resource, new: &Resource) -> Result<Option<String>, KmdiffError> {
    let old_text = canonical_text(old)?;
    let new_text = canonical_text(new)?;
    if old_text == new_text {
        return Ok(None);
    }
    let diff_text = line_diff(&old_text, &new_text);
    if diff_text.is_empty() {
        return Err(KmdiffError::Internal {
            message: format!(
                "canonical forms differ but line diff is empty for {}",
                ResourceIdentity::of(new)
            ),
        });
    }
    Ok(Some(diff_text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::index::index_resources;
    use crate::model::ChangeType;
    use serde_json::json;

    fn classify(old: &[Resource], new: &[Resource]) -> Vec<ChangeRecord> {
        classify_changes(&index_resources(old), &index_resources(new)).unwrap()
    }

    #[test]
    fn test_added_and_removed() {
        let old = vec![Resource::new("v1", "ConfigMap", "old")];
        let new = vec![Resource::new("v1", "ConfigMap", "new")];
        let records = classify(&old, &new);
        assert_eq!(records.len(), 2);
        assert!(records.contains(&ChangeRecord::removed(&ResourceIdentity::new(
            "default",
            "ConfigMap",
            "old"
        ))));
        assert!(records.contains(&ChangeRecord::added(&ResourceIdentity::new(
            "default",
            "ConfigMap",
            "new"
        ))));
    }

    #[test]
    fn test_unchanged_produces_nothing() {
        let r = Resource::new("v1", "ConfigMap", "c").with_field("data", json!({"k": "v"}));
        assert!(classify(&[r.clone()], &[r]).is_empty());
    }

    #[test]
    fn test_modified_carries_signed_lines() {
        let old = Resource::new("v1", "ConfigMap", "c").with_field("data", json!({"k": "old"}));
        let new = Resource::new("v1", "ConfigMap", "c").with_field("data", json!({"k": "new"}));
        let records = classify(&[old], &[new]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].change_type(), ChangeType::Modified);
        let text = records[0].diff_text().unwrap();
        assert!(text.lines().any(|l| l == "-  k: old"));
        assert!(text.lines().any(|l| l == "+  k: new"));
    }

    #[test]
    fn test_api_version_change_is_modification() {
        let old = Resource::new("apps/v1beta1", "Deployment", "web");
        let new = Resource::new("apps/v1", "Deployment", "web");
        let records = classify(&[old], &[new]);
        assert_eq!(records.len(), 1);
        assert!(records[0].diff_text().unwrap().contains("+apiVersion: apps/v1"));
    }

    #[test]
    fn test_scalar_to_mapping_change() {
        let old = Resource::new("v1", "ConfigMap", "c").with_field("data", json!("inline"));
        let new = Resource::new("v1", "ConfigMap", "c").with_field("data", json!({"k": "v"}));
        let records = classify(&[old], &[new]);
        let text = records[0].diff_text().unwrap();
        assert!(text.contains("-data: inline"));
        assert!(text.contains("+data:"));
        assert!(text.contains("+  k: v"));
    }
}
