//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use ideadup_core::{Idea, Subgroup};

use crate::error::StorageError;
use crate::traits::{ClusterStore, IdeaStore};

macro_rules! dispatch {
    ($self:expr, $trait:path, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Memory(s) => <crate::MemoryStorage as $trait>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::pg_storage::PgStorage as $trait>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Memory(crate::MemoryStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::pg_storage::PgStorage),
}

impl StorageBackend {
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(crate::MemoryStorage::new())
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::pg_storage::PgStorage::new(database_url).await?))
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

// ── IdeaStore ────────────────────────────────────────────────────

#[async_trait]
impl IdeaStore for StorageBackend {
    async fn upsert_ideas(&self, ideas: &[Idea]) -> Result<(), StorageError> {
        dispatch!(self, IdeaStore, upsert_ideas(ideas))
    }

    async fn get_idea(&self, idea_id: &str) -> Result<Option<Idea>, StorageError> {
        dispatch!(self, IdeaStore, get_idea(idea_id))
    }

    async fn idea_exists(&self, idea_id: &str) -> Result<bool, StorageError> {
        dispatch!(self, IdeaStore, idea_exists(idea_id))
    }

    async fn delete_idea_cascade(&self, idea_id: &str) -> Result<Option<usize>, StorageError> {
        dispatch!(self, IdeaStore, delete_idea_cascade(idea_id))
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>, StorageError> {
        dispatch!(self, IdeaStore, list_ideas())
    }

    async fn count_ideas(&self) -> Result<usize, StorageError> {
        dispatch!(self, IdeaStore, count_ideas())
    }
}

// ── ClusterStore ─────────────────────────────────────────────────

#[async_trait]
impl ClusterStore for StorageBackend {
    async fn replace_clusters(&self, subgroups: &[Subgroup]) -> Result<(), StorageError> {
        dispatch!(self, ClusterStore, replace_clusters(subgroups))
    }

    async fn list_clusters(&self) -> Result<Vec<Subgroup>, StorageError> {
        dispatch!(self, ClusterStore, list_clusters())
    }
}
