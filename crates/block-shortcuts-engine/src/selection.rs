use crate::candidates::CandidateItem;

/// Number of shortcuts shown next to the inserter
pub const DEFAULT_MAX_SHOWN: usize = 2;

/// Block type used as the empty placeholder in a fresh document
pub const DEFAULT_BLOCK_NAME: &str = "core/paragraph";

/// Turns ranked candidates into the shortcut list.
///
/// A bare default block is dropped since inserting it over the placeholder
/// changes nothing. A default block carrying initial attributes is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionSelector {
    default_block_name: String,
    max_shown: usize,
}

impl Default for SuggestionSelector {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_NAME)
    }
}

impl SuggestionSelector {
    pub fn new(default_block_name: impl Into<String>) -> Self {
        Self {
            default_block_name: default_block_name.into(),
            max_shown: DEFAULT_MAX_SHOWN,
        }
    }

    pub fn with_max_shown(mut self, max_shown: usize) -> Self {
        self.max_shown = max_shown;
        self
    }

    /// Filter out the bare default block, then keep the first `max_shown`
    /// items in ranker order
    pub fn select(&self, items: impl IntoIterator<Item = CandidateItem>) -> Vec<CandidateItem> {
        items
            .into_iter()
            .filter(|item| !self.is_bare_default(item))
            .take(self.max_shown)
            .collect()
    }

    fn is_bare_default(&self, item: &CandidateItem) -> bool {
        item.name == self.default_block_name && item.initial_attributes.is_empty()
    }
}
