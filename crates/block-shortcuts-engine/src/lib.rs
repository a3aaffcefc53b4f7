pub mod block_types;
pub mod candidates;
pub mod dispatch;
pub mod editor;
pub mod error;
pub mod frecency;
pub mod panel;
pub mod permissions;
pub mod selection;
pub mod settings;

// Re-export key types for easier usage
pub use block_types::{BlockTypeSet, TemplateLock};
pub use candidates::{Attributes, CandidateItem, CandidateRanker};
pub use dispatch::{Block, BlockStore, ClientId, InsertionContext, InsertionDispatcher, Mutation};
pub use editor::{BlockTree, EditorState, InsertionPoint};
pub use error::{RegistryError, StoreError};
pub use frecency::{BlockType, BlockTypeRegistry, FrecencyRanker, Usage, UsageStats};
pub use panel::ShortcutPanel;
pub use permissions::{LocalBlockSettings, resolve};
pub use selection::SuggestionSelector;
pub use settings::EditorSettings;
