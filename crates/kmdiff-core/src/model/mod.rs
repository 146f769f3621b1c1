//! Resource and change data model.
//!
//! All output types implement `Serialize`/`Deserialize` so the JSON view of a
//! [`DiffResult`] is lossless.

pub mod change;
pub mod identity;
pub mod resource;

pub use change::{ChangeRecord, ChangeType, DiffResult, NamespaceDiff};
pub use identity::{ResourceIdentity, DEFAULT_NAMESPACE};
pub use resource::{Resource, ResourceMetadata};
