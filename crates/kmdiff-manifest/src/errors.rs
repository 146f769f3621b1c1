//! Error helpers for manifest loading
//!
//! Wraps kmdiff-core ExError with loader-specific constructors

use kmdiff_core::errors::{ExError, ExErrorKind, KmdiffError};
use kmdiff_core::model::ResourceIdentity;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create an invalid manifest error for a 1-based document index
pub fn invalid_manifest(document: usize, reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidManifest)
        .with_op("parse_manifest")
        .with_document(document)
        .with_message(reason.to_string())
}

/// Create a malformed identity error for a 1-based document index
pub fn malformed_identity(
    document: usize,
    identity: &ResourceIdentity,
    err: KmdiffError,
) -> ExError {
    ExError::from(err)
        .with_op("parse_manifest")
        .with_document(document)
        .with_identity(identity.key())
}

/// Create an IO error
pub fn io_error(operation: &str, path: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_path(path.to_string())
        .with_message(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_manifest_carries_document() {
        let err = invalid_manifest(3, "document is not a mapping");
        assert_eq!(err.kind(), ExErrorKind::InvalidManifest);
        assert_eq!(err.document(), Some(3));
        assert_eq!(err.op(), Some("parse_manifest"));
    }

    #[test]
    fn test_io_error_carries_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = io_error("load_manifest", "missing.yaml", io);
        assert_eq!(err.code(), "ERR_IO");
        assert_eq!(err.path(), Some("missing.yaml"));
        assert!(err.to_string().contains("no such file"));
    }
}
