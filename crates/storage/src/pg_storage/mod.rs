//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod clusters;
mod ideas;

use chrono::{DateTime, Utc};
use ideadup_core::{
    Idea, PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

const IDEA_COLUMNS: &str =
    "idea_id, idea_title, idea_description, idea_key_words, idea_embedding, updated_at";

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(PG_POOL_MAX_CONNECTIONS)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!("PgStorage initialized");
        Ok(Self { pool })
    }
}

/// Embeddings are stored as FLOAT8[]; the model produces f32.
pub(crate) fn embedding_to_pg(embedding: Option<&[f32]>) -> Option<Vec<f64>> {
    embedding.map(|e| e.iter().map(|x| f64::from(*x)).collect())
}

#[allow(clippy::cast_possible_truncation, reason = "values were written from f32")]
pub(crate) fn embedding_from_pg(embedding: Option<Vec<f64>>) -> Option<Vec<f32>> {
    embedding.map(|e| e.into_iter().map(|x| x as f32).collect())
}

pub(crate) fn row_to_idea(row: &sqlx::postgres::PgRow) -> Result<Idea, StorageError> {
    let updated_at: DateTime<Utc> = row.try_get("updated_at")?;
    Ok(Idea {
        idea_id: row.try_get("idea_id")?,
        title: row.try_get("idea_title")?,
        description: row.try_get("idea_description")?,
        keywords: row.try_get("idea_key_words")?,
        embedding: embedding_from_pg(row.try_get("idea_embedding")?),
        updated_at,
    })
}
