//! Turning a chosen shortcut into a store mutation.

use crate::candidates::{Attributes, CandidateItem};
use crate::editor::EditorState;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Editor-assigned identifier of a block instance
pub type ClientId = Uuid;

/// A block instance in the document tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub client_id: ClientId,
    pub name: String,
    pub attributes: Attributes,
    #[serde(default)]
    pub inner_blocks: Vec<Block>,
}

impl Block {
    /// Create a new block with a fresh client id and no inner blocks
    pub fn new(name: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            client_id: Uuid::new_v4(),
            name: name.into(),
            attributes,
            inner_blocks: Vec::new(),
        }
    }
}

/// Where a shortcut lands in the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertionContext {
    /// Container whose local settings apply; `None` is the document root
    pub root_client_id: Option<ClientId>,
    /// Placeholder block replaced by the new block
    pub anchor: ClientId,
}

impl InsertionContext {
    /// Context replacing `anchor` inside the container of the editor's
    /// current insertion point
    pub fn at_insertion_point<S: EditorState + ?Sized>(state: &S, anchor: ClientId) -> Self {
        Self {
            root_client_id: state.insertion_point().root_client_id,
            anchor,
        }
    }
}

/// A write request against the block store
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    ReplaceBlocks { anchor: ClientId, blocks: Vec<Block> },
}

/// Write side of the editor state
pub trait BlockStore {
    fn apply(&mut self, mutation: Mutation) -> Result<(), StoreError>;
}

/// Builds blocks from shortcuts and issues the replace request
pub struct InsertionDispatcher;

impl InsertionDispatcher {
    /// Build the block for `chosen`; `layout` wins over initial attributes on
    /// key collision
    pub fn build_block(chosen: &CandidateItem, layout: &Attributes) -> Block {
        let mut attributes = chosen.initial_attributes.clone();
        attributes.extend(layout.iter().map(|(key, value)| (key.clone(), value.clone())));
        Block::new(chosen.name.clone(), attributes)
    }

    /// The single mutation replacing the anchor with the new block
    pub fn insert(context: &InsertionContext, chosen: &CandidateItem, layout: &Attributes) -> Mutation {
        let block = Self::build_block(chosen, layout);
        log::debug!(
            "Replacing block {} with new {} block {}",
            context.anchor,
            block.name,
            block.client_id
        );
        Mutation::ReplaceBlocks {
            anchor: context.anchor,
            blocks: vec![block],
        }
    }

    /// Build and apply the mutation, returning the inserted block.
    ///
    /// Store failures are returned as-is; nothing is retried.
    pub fn dispatch<S: BlockStore + ?Sized>(
        store: &mut S,
        context: &InsertionContext,
        chosen: &CandidateItem,
        layout: &Attributes,
    ) -> Result<Block, StoreError> {
        let mutation = Self::insert(context, chosen, layout);
        let Mutation::ReplaceBlocks { blocks, .. } = &mutation;
        let block = blocks[0].clone();

        if let Err(e) = store.apply(mutation) {
            log::warn!("Store rejected shortcut insertion of {}: {e}", chosen.name);
            return Err(e);
        }

        Ok(block)
    }
}
