use crate::block_types::{BlockTypeSet, TemplateLock};
use crate::selection::{DEFAULT_BLOCK_NAME, DEFAULT_MAX_SHOWN};
use serde::{Deserialize, Serialize};

/// Number of ranked candidates requested before the default block is filtered out
pub const DEFAULT_FRECENT_ITEMS: usize = 3;

/// Editor-wide settings passed explicitly to the shortcut panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    pub template_lock: TemplateLock,
    /// Global allow-list of insertable block types
    pub block_types: BlockTypeSet,
    pub default_block_name: String,
    pub max_shortcuts: usize,
    pub frecent_items: usize,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            template_lock: TemplateLock::Unlocked,
            block_types: BlockTypeSet::Unrestricted,
            default_block_name: DEFAULT_BLOCK_NAME.to_string(),
            max_shortcuts: DEFAULT_MAX_SHOWN,
            frecent_items: DEFAULT_FRECENT_ITEMS,
        }
    }
}
