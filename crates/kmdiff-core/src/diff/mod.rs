//! Manifest diff pipeline.
//!
//! Compares two resource lists and produces a deterministic, namespace-grouped
//! [`DiffResult`](crate::model::DiffResult).
//!
//! ## Entry point
//!
//! ```ignore
//! use kmdiff_core::diff::diff_resources;
//!
//! let result = diff_resources(&old_resources, &new_resources)?;
//! let markdown = kmdiff_core::render::render_markdown(&result);
//! ```
//!
//! ## Stages
//!
//! 1. [`index`]: identity -> resource, last duplicate wins
//! 2. [`classify`]: added / removed / modified over the union of identities
//! 3. [`group`]: namespace partition, then `(kind, name)` order
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce byte-identical output,
//!   regardless of input order.
//! - **Key-order insensitivity**: mapping key order never produces a change.
//! - **Array-order sensitivity**: reordered list elements are a modification.

pub mod classify;
pub mod engine;
pub mod group;
pub mod index;
pub mod line_diff;
pub mod normalize;

pub use classify::classify_changes;
pub use engine::diff_resources;
pub use group::group_changes;
pub use index::{index_resources, ResourceIndex};
pub use line_diff::line_diff;
pub use normalize::{canonical_text, normalize_value};
