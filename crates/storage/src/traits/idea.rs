use async_trait::async_trait;
use ideadup_core::Idea;

use crate::error::StorageError;

/// Idea corpus operations.
///
/// The corpus is ordered by first insertion; replacing an idea keeps its place.
#[async_trait]
pub trait IdeaStore: Send + Sync {
    /// Insert or replace ideas by `idea_id` (last write wins).
    async fn upsert_ideas(&self, ideas: &[Idea]) -> Result<(), StorageError>;

    /// Get idea by ID.
    async fn get_idea(&self, idea_id: &str) -> Result<Option<Idea>, StorageError>;

    async fn idea_exists(&self, idea_id: &str) -> Result<bool, StorageError>;

    /// Delete an idea and drop it from every stored subgroup in one atomic
    /// step. Subgroups left empty are deleted.
    ///
    /// Returns `None` when no such idea is stored (nothing changes), otherwise
    /// how many subgroups were rewritten or deleted.
    async fn delete_idea_cascade(&self, idea_id: &str) -> Result<Option<usize>, StorageError>;

    /// Every stored idea in corpus order.
    async fn list_ideas(&self) -> Result<Vec<Idea>, StorageError>;

    async fn count_ideas(&self) -> Result<usize, StorageError>;
}
