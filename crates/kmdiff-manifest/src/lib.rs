//! kmdiff Manifest - loading Kubernetes manifests from YAML
//!
//! Provides:
//! - Multi-document YAML splitting (`---` separators, empty documents skipped)
//! - Per-document validation into [`kmdiff_core::Resource`]
//! - File loading with path and document context on every error

pub mod errors;
pub mod parser;

pub use errors::Result;
pub use parser::{load_manifest_file, parse_manifest_str};
