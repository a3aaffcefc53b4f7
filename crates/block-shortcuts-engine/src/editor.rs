//! Read-only editor queries and an in-memory block tree implementing them.

use crate::dispatch::{Block, BlockStore, ClientId, Mutation};
use crate::error::StoreError;
use crate::permissions::LocalBlockSettings;
use std::collections::HashMap;

/// Where the next block would be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertionPoint {
    /// Container of the insertion point; `None` is the document root
    pub root_client_id: Option<ClientId>,
    pub index: usize,
}

/// Snapshot queries the shortcut panel reads from
pub trait EditorState {
    fn insertion_point(&self) -> InsertionPoint;

    /// Local settings of a container, if any were registered for it
    fn block_list_settings(&self, root_client_id: Option<ClientId>) -> Option<&LocalBlockSettings>;
}

/// In-memory document tree with per-container settings
#[derive(Debug, Default)]
pub struct BlockTree {
    blocks: Vec<Block>,
    settings: HashMap<Option<ClientId>, LocalBlockSettings>,
    insertion_point: InsertionPoint,
}

impl BlockTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level blocks in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Find a block anywhere in the tree
    pub fn block(&self, client_id: ClientId) -> Option<&Block> {
        find_block(&self.blocks, client_id)
    }

    /// Append a block to a container, returning its client id
    pub fn append_block(
        &mut self,
        root_client_id: Option<ClientId>,
        block: Block,
    ) -> Result<ClientId, StoreError> {
        let client_id = block.client_id;
        let container = match root_client_id {
            None => &mut self.blocks,
            Some(root) => {
                &mut find_block_mut(&mut self.blocks, root)
                    .ok_or(StoreError::BlockNotFound(root))?
                    .inner_blocks
            }
        };
        container.push(block);
        Ok(client_id)
    }

    pub fn set_block_list_settings(
        &mut self,
        root_client_id: Option<ClientId>,
        settings: LocalBlockSettings,
    ) {
        self.settings.insert(root_client_id, settings);
    }

    pub fn set_insertion_point(&mut self, insertion_point: InsertionPoint) {
        self.insertion_point = insertion_point;
    }
}

impl EditorState for BlockTree {
    fn insertion_point(&self) -> InsertionPoint {
        self.insertion_point
    }

    fn block_list_settings(&self, root_client_id: Option<ClientId>) -> Option<&LocalBlockSettings> {
        self.settings.get(&root_client_id)
    }
}

impl BlockStore for BlockTree {
    fn apply(&mut self, mutation: Mutation) -> Result<(), StoreError> {
        match mutation {
            Mutation::ReplaceBlocks { anchor, blocks } => {
                if replace_block(&mut self.blocks, anchor, blocks) {
                    Ok(())
                } else {
                    Err(StoreError::BlockNotFound(anchor))
                }
            }
        }
    }
}

fn find_block(blocks: &[Block], client_id: ClientId) -> Option<&Block> {
    blocks.iter().find_map(|block| {
        if block.client_id == client_id {
            Some(block)
        } else {
            find_block(&block.inner_blocks, client_id)
        }
    })
}

fn find_block_mut(blocks: &mut [Block], client_id: ClientId) -> Option<&mut Block> {
    for block in blocks {
        if block.client_id == client_id {
            return Some(block);
        }
        if let Some(found) = find_block_mut(&mut block.inner_blocks, client_id) {
            return Some(found);
        }
    }
    None
}

/// Splice `replacement` in place of the anchor, searching nested containers
fn replace_block(blocks: &mut Vec<Block>, anchor: ClientId, replacement: Vec<Block>) -> bool {
    if let Some(index) = blocks.iter().position(|block| block.client_id == anchor) {
        blocks.splice(index..=index, replacement);
        return true;
    }
    match blocks
        .iter_mut()
        .find(|block| find_block(&block.inner_blocks, anchor).is_some())
    {
        Some(container) => replace_block(&mut container.inner_blocks, anchor, replacement),
        None => false,
    }
}
