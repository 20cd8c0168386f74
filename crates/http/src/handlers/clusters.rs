use axum::{extract::State, Json};
use std::sync::Arc;

use ideadup_core::ClusteringReport;

use crate::api_error::ApiError;
use crate::api_types::ClustersResponse;
use crate::AppState;

pub async fn list_clusters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClustersResponse>, ApiError> {
    let clusters = state.service.list_clusters().await?;
    Ok(Json(ClustersResponse { total: clusters.len(), clusters }))
}

pub async fn rebuild_clusters(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClusteringReport>, ApiError> {
    let _guard = state.write_lock.lock().await;
    Ok(Json(state.service.process_clusters().await?))
}
