//! The shortcut panel's query and dispatch boundary.
//!
//! Reads a snapshot of editor state, computes the effective allow-list for
//! the context's container, asks the ranker for candidates and selects the
//! shortcuts to show. Picking a shortcut yields one replace mutation.

use crate::block_types::BlockTypeSet;
use crate::candidates::{Attributes, CandidateItem, CandidateRanker};
use crate::dispatch::{Block, BlockStore, InsertionContext, InsertionDispatcher, Mutation};
use crate::editor::EditorState;
use crate::error::StoreError;
use crate::permissions::resolve;
use crate::selection::SuggestionSelector;
use crate::settings::EditorSettings;

pub struct ShortcutPanel<'a> {
    settings: &'a EditorSettings,
    selector: SuggestionSelector,
}

impl<'a> ShortcutPanel<'a> {
    pub fn new(settings: &'a EditorSettings) -> Self {
        let selector = SuggestionSelector::new(settings.default_block_name.clone())
            .with_max_shown(settings.max_shortcuts);
        Self { settings, selector }
    }

    pub fn is_locked(&self) -> bool {
        self.settings.template_lock.is_locked()
    }

    /// Allow-list for the container the context inserts into
    pub fn effective_allow_set<S: EditorState + ?Sized>(
        &self,
        state: &S,
        context: &InsertionContext,
    ) -> BlockTypeSet {
        let root_client_id = context.root_client_id;
        let local = state
            .block_list_settings(root_client_id)
            .and_then(|settings| settings.supported_blocks.as_ref());
        let allowed = resolve(&self.settings.block_types, local);
        log::debug!("Effective allow set for {root_client_id:?}: {allowed:?}");
        allowed
    }

    /// Shortcuts to show, best first. Empty under a template lock.
    pub fn shortcuts<S, R>(
        &self,
        state: &S,
        context: &InsertionContext,
        ranker: &R,
    ) -> Vec<CandidateItem>
    where
        S: EditorState + ?Sized,
        R: CandidateRanker + ?Sized,
    {
        if self.is_locked() {
            log::info!(
                "Template lock {:?} active, no shortcuts offered",
                self.settings.template_lock
            );
            return Vec::new();
        }

        let allowed = self.effective_allow_set(state, context);
        let ranked = ranker.rank(&allowed, self.settings.frecent_items);
        let ranked_count = ranked.len();
        let shortcuts = self.selector.select(ranked);
        log::debug!(
            "Selected {} of {ranked_count} ranked candidates",
            shortcuts.len()
        );
        shortcuts
    }

    /// Mutation for picking `chosen`, or `None` under a template lock
    pub fn on_insert(
        &self,
        context: &InsertionContext,
        chosen: &CandidateItem,
        layout: &Attributes,
    ) -> Option<Mutation> {
        if self.is_locked() {
            return None;
        }
        Some(InsertionDispatcher::insert(context, chosen, layout))
    }

    /// Apply the pick directly to `store`. Returns `Ok(None)` under a template lock.
    pub fn insert_into<S: BlockStore + ?Sized>(
        &self,
        store: &mut S,
        context: &InsertionContext,
        chosen: &CandidateItem,
        layout: &Attributes,
    ) -> Result<Option<Block>, StoreError> {
        if self.is_locked() {
            return Ok(None);
        }
        InsertionDispatcher::dispatch(store, context, chosen, layout).map(Some)
    }
}
