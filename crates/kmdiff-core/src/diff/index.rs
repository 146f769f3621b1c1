//! Identity index over one side of the comparison.

use crate::model::{Resource, ResourceIdentity};
use std::collections::BTreeMap;

/// Identity -> resource mapping for one input side
pub type ResourceIndex<'a> = BTreeMap<ResourceIdentity, &'a Resource>;

/// Index a resource list by identity.
///
/// When several resources share an identity the last one in the list wins.
/// Duplicates are logged at debug level and are not an error.
pub fn index_resources(resources: &[Resource]) -> ResourceIndex<'_> {
    let mut index = ResourceIndex::new();
    for resource in resources {
        let identity = ResourceIdentity::of(resource);
        if let Some(previous) = index.insert(identity, resource) {
            tracing::debug!(
                component = module_path!(),
                identity = %ResourceIdentity::of(previous),
                "duplicate resource identity, later document wins"
            );
        }
    }
    index
}
