//! PostgreSQL schema migrations for ideadup storage.

use sqlx::PgPool;

/// Run all PostgreSQL migrations. Every statement is idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS ideas (
            seq BIGSERIAL PRIMARY KEY,
            idea_id TEXT UNIQUE NOT NULL,
            idea_title TEXT NOT NULL,
            idea_description TEXT NOT NULL,
            idea_key_words TEXT[] NOT NULL DEFAULT '{}',
            idea_embedding FLOAT8[],
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clusters (
            seq BIGSERIAL PRIMARY KEY,
            cluster_id TEXT UNIQUE NOT NULL,
            members TEXT[] NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_clusters_members ON clusters USING GIN (members)")
        .execute(pool)
        .await?;

    tracing::debug!("PostgreSQL migrations applied");
    Ok(())
}
