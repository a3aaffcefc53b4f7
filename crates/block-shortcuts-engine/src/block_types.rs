//! Block type allow-lists and template locking.
//!
//! Both types mirror the shapes found in editor settings: an allow-list is
//! either `true` (every registered type) or a list of type names, and a
//! template lock is either `false` or a lock mode string.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Set of block type names that may be inserted.
///
/// `Unrestricted` is absorbing under intersection: `Unrestricted ∩ X == X`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawBlockTypeSet", into = "RawBlockTypeSet")]
pub enum BlockTypeSet {
    /// Every registered block type is permitted
    #[default]
    Unrestricted,
    /// Only the named block types are permitted
    Restricted(BTreeSet<String>),
}

impl BlockTypeSet {
    /// Build an explicit allow-list from block type names
    pub fn restricted<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BlockTypeSet::Restricted(names.into_iter().map(Into::into).collect())
    }

    /// Check whether a block type may be inserted
    pub fn allows(&self, name: &str) -> bool {
        match self {
            BlockTypeSet::Unrestricted => true,
            BlockTypeSet::Restricted(names) => names.contains(name),
        }
    }

    /// True only for an explicit allow-list with no entries
    pub fn is_empty(&self) -> bool {
        matches!(self, BlockTypeSet::Restricted(names) if names.is_empty())
    }

    pub fn intersection(&self, other: &BlockTypeSet) -> BlockTypeSet {
        match (self, other) {
            (BlockTypeSet::Unrestricted, _) => other.clone(),
            (_, BlockTypeSet::Unrestricted) => self.clone(),
            (BlockTypeSet::Restricted(a), BlockTypeSet::Restricted(b)) => {
                BlockTypeSet::Restricted(a.intersection(b).cloned().collect())
            }
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawBlockTypeSet {
    Flag(bool),
    Names(Vec<String>),
}

impl From<RawBlockTypeSet> for BlockTypeSet {
    fn from(raw: RawBlockTypeSet) -> Self {
        match raw {
            RawBlockTypeSet::Flag(true) => BlockTypeSet::Unrestricted,
            RawBlockTypeSet::Flag(false) => BlockTypeSet::Restricted(BTreeSet::new()),
            RawBlockTypeSet::Names(names) => BlockTypeSet::restricted(names),
        }
    }
}

impl From<BlockTypeSet> for RawBlockTypeSet {
    fn from(set: BlockTypeSet) -> Self {
        match set {
            BlockTypeSet::Unrestricted => RawBlockTypeSet::Flag(true),
            BlockTypeSet::Restricted(names) => RawBlockTypeSet::Names(names.into_iter().collect()),
        }
    }
}

/// Template lock applied to the whole editor.
///
/// Any lock other than `Unlocked` suppresses the shortcut panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawTemplateLock", into = "RawTemplateLock")]
pub enum TemplateLock {
    #[default]
    Unlocked,
    /// Blocks may be neither inserted, moved nor removed
    All,
    /// Blocks may be moved but not inserted or removed
    Insert,
}

impl TemplateLock {
    pub fn is_locked(self) -> bool {
        self != TemplateLock::Unlocked
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum LockMode {
    All,
    Insert,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawTemplateLock {
    Flag(bool),
    Mode(LockMode),
}

impl From<RawTemplateLock> for TemplateLock {
    fn from(raw: RawTemplateLock) -> Self {
        match raw {
            RawTemplateLock::Flag(false) => TemplateLock::Unlocked,
            RawTemplateLock::Flag(true) | RawTemplateLock::Mode(LockMode::All) => TemplateLock::All,
            RawTemplateLock::Mode(LockMode::Insert) => TemplateLock::Insert,
        }
    }
}

impl From<TemplateLock> for RawTemplateLock {
    fn from(lock: TemplateLock) -> Self {
        match lock {
            TemplateLock::Unlocked => RawTemplateLock::Flag(false),
            TemplateLock::All => RawTemplateLock::Mode(LockMode::All),
            TemplateLock::Insert => RawTemplateLock::Mode(LockMode::Insert),
        }
    }
}
