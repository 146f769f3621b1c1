//! Diff pipeline entry point.
//!
//! [`diff_resources`] runs index -> classify -> group over two resource lists
//! and produces a [`DiffResult`].

use crate::diff::classify::classify_changes;
use crate::diff::group::group_changes;
use crate::diff::index::index_resources;
use crate::errors::{ExError, ExErrorKind};
use crate::model::{ChangeType, DiffResult, Resource};
use crate::{log_op_end, log_op_error, log_op_start};
use std::time::Instant;

const OP: &str = "diff_resources";

/// Compare two resource lists and return the grouped, ordered changes.
///
/// Inputs must already be validated (non-empty kind and name); see
/// [`Resource::validate`].
///
/// # Errors
///
/// - `Serialization` - a resource cannot be rendered to canonical text
/// - `Internal` - canonical texts differ but yield an empty line diff
/// - `DeterminismViolation` - the result fails its JSON round-trip check
pub fn diff_resources(old: &[Resource], new: &[Resource]) -> Result<DiffResult, ExError> {
    let started = Instant::now();
    log_op_start!(OP, old_len = old.len(), new_len = new.len());

    match run(old, new) {
        Ok(result) => {
            log_op_end!(
                OP,
                duration_ms = started.elapsed().as_millis() as u64,
                change_count = result.change_count(),
                added = result.count_of(ChangeType::Added),
                removed = result.count_of(ChangeType::Removed),
                modified = result.count_of(ChangeType::Modified),
            );
            Ok(result)
        }
        Err(err) => {
            log_op_error!(
                OP,
                err.clone(),
                duration_ms = started.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn run(old: &[Resource], new: &[Resource]) -> Result<DiffResult, ExError> {
    let old_index = index_resources(old);
    let new_index = index_resources(new);

    let records = classify_changes(&old_index, &new_index)
        .map_err(|e| ExError::from(e).with_op(OP))?;
    let result = group_changes(records);

    // Round-trip through JSON must produce an equal value
    let serialized = serde_json::to_string(&result).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op(OP)
            .with_message(format!("failed to serialize diff: {}", e))
    })?;
    let reparsed: DiffResult = serde_json::from_str(&serialized).map_err(|e| {
        ExError::new(ExErrorKind::DeterminismViolation)
            .with_op(OP)
            .with_message(format!("failed to re-parse diff: {}", e))
    })?;
    if reparsed != result {
        return Err(ExError::new(ExErrorKind::DeterminismViolation)
            .with_op(OP)
            .with_message("diff is not deterministic: round-trip produced different result"));
    }

    Ok(result)
}
