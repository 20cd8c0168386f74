//! ClusterStore implementation for PgStorage.

use super::*;

use crate::traits::ClusterStore;
use async_trait::async_trait;
use ideadup_core::Subgroup;

#[async_trait]
impl ClusterStore for PgStorage {
    async fn replace_clusters(&self, subgroups: &[Subgroup]) -> Result<(), StorageError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM clusters").execute(&mut *tx).await?;
        for subgroup in subgroups {
            sqlx::query("INSERT INTO clusters (cluster_id, members) VALUES ($1, $2)")
                .bind(&subgroup.cluster_id)
                .bind(&subgroup.members)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn list_clusters(&self) -> Result<Vec<Subgroup>, StorageError> {
        let rows = sqlx::query("SELECT cluster_id, members FROM clusters ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_subgroup).collect()
    }
}

/// Drop `idea_id` from every subgroup holding it inside the caller's
/// transaction. Returns how many subgroups were rewritten or deleted.
pub(super) async fn strip_member(
    conn: &mut sqlx::PgConnection,
    idea_id: &str,
) -> Result<usize, StorageError> {
    let rows = sqlx::query(
        "SELECT cluster_id, members FROM clusters WHERE $1 = ANY(members) ORDER BY seq FOR UPDATE",
    )
    .bind(idea_id)
    .fetch_all(&mut *conn)
    .await?;

    let mut touched = 0_usize;
    for row in &rows {
        let subgroup = row_to_subgroup(row)?;
        match subgroup.without(idea_id) {
            Some(rest) => {
                sqlx::query("UPDATE clusters SET members = $2 WHERE cluster_id = $1")
                    .bind(&rest.cluster_id)
                    .bind(&rest.members)
                    .execute(&mut *conn)
                    .await?;
            },
            None => {
                sqlx::query("DELETE FROM clusters WHERE cluster_id = $1")
                    .bind(&subgroup.cluster_id)
                    .execute(&mut *conn)
                    .await?;
            },
        }
        touched = touched.saturating_add(1);
    }
    Ok(touched)
}

fn row_to_subgroup(row: &sqlx::postgres::PgRow) -> Result<Subgroup, StorageError> {
    let cluster_id: String = row.try_get("cluster_id")?;
    Ok(Subgroup::new(cluster_id, row.try_get("members")?))
}
