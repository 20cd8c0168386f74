//! In-process storage backend.
//!
//! Holds the corpus and subgroups behind an async `RwLock`. Nothing survives
//! a restart; used when no database is configured and by tests.

use std::sync::Arc;

use async_trait::async_trait;
use ideadup_core::{Idea, Subgroup};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::{ClusterStore, IdeaStore};

#[derive(Debug, Default)]
struct MemoryState {
    ideas: Vec<Idea>,
    clusters: Vec<Subgroup>,
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdeaStore for MemoryStorage {
    async fn upsert_ideas(&self, ideas: &[Idea]) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        for idea in ideas {
            match state.ideas.iter_mut().find(|stored| stored.idea_id == idea.idea_id) {
                Some(stored) => *stored = idea.clone(),
                None => state.ideas.push(idea.clone()),
            }
        }
        Ok(())
    }

    async fn get_idea(&self, idea_id: &str) -> Result<Option<Idea>, StorageError> {
        let state = self.state.read().await;
        Ok(state.ideas.iter().find(|i| i.idea_id == idea_id).cloned())
    }

    async fn idea_exists(&self, idea_id: &str) -> Result<bool, StorageError> {
        let state = self.state.read().await;
        Ok(state.ideas.iter().any(|i| i.idea_id == idea_id))
    }

    async fn delete_idea_cascade(&self, idea_id: &str) -> Result<Option<usize>, StorageError> {
        let mut state = self.state.write().await;
        let Some(pos) = state.ideas.iter().position(|i| i.idea_id == idea_id) else {
            return Ok(None);
        };
        state.ideas.remove(pos);

        let mut touched = 0_usize;
        let clusters = std::mem::take(&mut state.clusters);
        for subgroup in clusters {
            if !subgroup.contains(idea_id) {
                state.clusters.push(subgroup);
                continue;
            }
            touched = touched.saturating_add(1);
            if let Some(rest) = subgroup.without(idea_id) {
                state.clusters.push(rest);
            }
        }
        Ok(Some(touched))
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>, StorageError> {
        Ok(self.state.read().await.ideas.clone())
    }

    async fn count_ideas(&self) -> Result<usize, StorageError> {
        Ok(self.state.read().await.ideas.len())
    }
}

#[async_trait]
impl ClusterStore for MemoryStorage {
    async fn replace_clusters(&self, subgroups: &[Subgroup]) -> Result<(), StorageError> {
        let mut state = self.state.write().await;
        state.clusters = subgroups.to_vec();
        Ok(())
    }

    async fn list_clusters(&self) -> Result<Vec<Subgroup>, StorageError> {
        Ok(self.state.read().await.clusters.clone())
    }
}
