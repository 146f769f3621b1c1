//! kmdiff Core - manifest comparison kernel
//!
//! This crate provides the pure, I/O-free part of kmdiff:
//! - Resource model with identity derivation (`namespace/kind/name`)
//! - Indexing of resource lists (last duplicate wins)
//! - Structural normalization and canonical YAML serialization
//! - Change classification with line-level diffs for modified resources
//! - Deterministic grouping by namespace, then kind, then name
//! - Markdown and JSON rendering of the grouped result
//!
//! File reading and YAML document parsing live in `kmdiff-manifest`.

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use diff::diff_resources;
pub use errors::{ExError, ExErrorKind, KmdiffError, Result};
pub use model::{ChangeRecord, ChangeType, DiffResult, NamespaceDiff, Resource, ResourceIdentity};
pub use render::{render, render_json, render_markdown, OutputFormat};

// Schema constants used by the logging macros
pub use kmdiff_core_types::schema;
