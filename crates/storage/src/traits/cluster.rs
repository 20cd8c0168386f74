use async_trait::async_trait;
use ideadup_core::Subgroup;

use crate::error::StorageError;

/// Stored subgroup operations.
#[async_trait]
pub trait ClusterStore: Send + Sync {
    /// Atomically replace every stored subgroup with `subgroups`.
    async fn replace_clusters(&self, subgroups: &[Subgroup]) -> Result<(), StorageError>;

    /// Stored subgroups in insertion order.
    async fn list_clusters(&self) -> Result<Vec<Subgroup>, StorageError>;
}
