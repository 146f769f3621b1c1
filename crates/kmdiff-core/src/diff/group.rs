//! Namespace grouping and deterministic ordering.

use crate::model::{ChangeRecord, DiffResult, NamespaceDiff};
use std::collections::BTreeMap;

/// Group records by their namespace and order them.
///
/// Namespaces are ordered byte-wise; records within a namespace are ordered
/// by `(kind, name)`, byte-wise. The result does not depend on input order.
pub fn group_changes(records: Vec<ChangeRecord>) -> DiffResult {
    let mut groups: BTreeMap<String, Vec<ChangeRecord>> = BTreeMap::new();
    for record in records {
        groups
            .entry(record.namespace().to_string())
            .or_default()
            .push(record);
    }

    let namespaces = groups
        .into_iter()
        .map(|(namespace, mut diffs)| {
            diffs.sort_by(|a, b| (a.kind(), a.name()).cmp(&(b.kind(), b.name())));
            NamespaceDiff { namespace, diffs }
        })
        .collect();

    DiffResult::new(namespaces)
}
