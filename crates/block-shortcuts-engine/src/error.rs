use crate::dispatch::ClientId;

/// Failures reported by a block store when applying a mutation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Block not found: {0}")]
    BlockNotFound(ClientId),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Block type is not registered: {0}")]
    UnknownBlockType(String),
    #[error("Block type is already registered: {0}")]
    AlreadyRegistered(String),
}
