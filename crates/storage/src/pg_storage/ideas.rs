//! IdeaStore implementation for PgStorage.

use super::*;

use super::clusters::strip_member;
use crate::traits::IdeaStore;
use async_trait::async_trait;

#[async_trait]
impl IdeaStore for PgStorage {
    async fn upsert_ideas(&self, ideas: &[Idea]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        for idea in ideas {
            sqlx::query(&format!(
                "INSERT INTO ideas ({IDEA_COLUMNS})
                 VALUES ($1,$2,$3,$4,$5,$6)
                 ON CONFLICT (idea_id) DO UPDATE SET
                   idea_title = EXCLUDED.idea_title,
                   idea_description = EXCLUDED.idea_description,
                   idea_key_words = EXCLUDED.idea_key_words,
                   idea_embedding = EXCLUDED.idea_embedding,
                   updated_at = EXCLUDED.updated_at"
            ))
            .bind(&idea.idea_id)
            .bind(&idea.title)
            .bind(&idea.description)
            .bind(&idea.keywords)
            .bind(embedding_to_pg(idea.embedding.as_deref()))
            .bind(idea.updated_at)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn get_idea(&self, idea_id: &str) -> Result<Option<Idea>, StorageError> {
        let row = sqlx::query(&format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE idea_id = $1"))
            .bind(idea_id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_idea(&r)).transpose()
    }

    async fn idea_exists(&self, idea_id: &str) -> Result<bool, StorageError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM ideas WHERE idea_id = $1)")
                .bind(idea_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn delete_idea_cascade(&self, idea_id: &str) -> Result<Option<usize>, StorageError> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM ideas WHERE idea_id = $1")
            .bind(idea_id)
            .execute(&mut *tx)
            .await?;
        if deleted.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }
        let touched = strip_member(&mut *tx, idea_id).await?;
        tx.commit().await?;
        Ok(Some(touched))
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>, StorageError> {
        let rows = sqlx::query(&format!("SELECT {IDEA_COLUMNS} FROM ideas ORDER BY seq"))
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_idea).collect()
    }

    async fn count_ideas(&self) -> Result<usize, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ideas")
            .fetch_one(&self.pool)
            .await?;
        usize::try_from(count).map_err(|e| StorageError::DataCorruption {
            context: "negative idea count".into(),
            source: Box::new(e),
        })
    }
}
