//! Reconciles the editor-wide allow-list with a container's own restriction.

use crate::block_types::BlockTypeSet;
use serde::{Deserialize, Serialize};

/// Per-container settings that may narrow which block types are insertable
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalBlockSettings {
    /// `None` means the container adds no restriction of its own
    #[serde(default)]
    pub supported_blocks: Option<BlockTypeSet>,
}

impl LocalBlockSettings {
    pub fn supporting(supported_blocks: BlockTypeSet) -> Self {
        Self {
            supported_blocks: Some(supported_blocks),
        }
    }
}

/// Compute the effective allow-list for an insertion point.
///
/// - no local override: the global set is returned unchanged
/// - global set unrestricted: the local set wins
/// - otherwise: the intersection of both
pub fn resolve(global: &BlockTypeSet, local: Option<&BlockTypeSet>) -> BlockTypeSet {
    match (global, local) {
        (_, None) => global.clone(),
        (BlockTypeSet::Unrestricted, Some(local)) => local.clone(),
        (BlockTypeSet::Restricted(_), Some(local)) => global.intersection(local),
    }
}
