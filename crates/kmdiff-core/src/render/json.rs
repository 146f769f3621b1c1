//! Structured JSON view.

use crate::errors::{ExError, ExErrorKind};
use crate::model::DiffResult;

/// Pretty-printed JSON array of namespace groups.
///
/// Lossless: parsing the output back yields an equal [`DiffResult`].
///
/// # Errors
///
/// Returns `Serialization` if encoding fails.
pub fn render_json(result: &DiffResult) -> Result<String, ExError> {
    serde_json::to_string_pretty(result).map_err(|e| {
        ExError::new(ExErrorKind::Serialization)
            .with_op("render_json")
            .with_message(e.to_string())
    })
}
