//! Errors of the deduplication workflow.

use ideadup_embeddings::EmbeddingError;
use ideadup_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// The model failed or returned unusable vectors. Never retried or swallowed.
    #[error("embedding: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Update of an idea id that is not stored.
    #[error("idea not found: {0}")]
    NotFound(String),

    /// Blank id, empty batch and similar caller mistakes.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Panicked blocking task or a clustering invariant broken by stored data.
    #[error("system: {0}")]
    System(#[source] anyhow::Error),
}

impl ServiceError {
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Storage(StorageError::NotFound { .. }))
    }

    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_duplicate())
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::System(anyhow::anyhow!("blocking task failed: {err}"))
    }
}

impl From<ideadup_core::CoreError> for ServiceError {
    fn from(err: ideadup_core::CoreError) -> Self {
        Self::System(anyhow::Error::new(err))
    }
}
