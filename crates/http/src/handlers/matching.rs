use axum::{extract::State, Json};
use std::sync::Arc;

use ideadup_core::MatchResult;
use ideadup_service::KeywordPreview;

use crate::api_error::ApiError;
use crate::api_types::{KeywordsRequest, MatchRequest};
use crate::AppState;

pub async fn match_idea(
    State(state): State<Arc<AppState>>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchResult>, ApiError> {
    if req.title.trim().is_empty() && req.description.trim().is_empty() {
        return Err(ApiError::BadRequest("title or description is required".to_owned()));
    }
    if req.top_n == Some(0) {
        return Err(ApiError::BadRequest("top_n must be at least 1".to_owned()));
    }
    let result = state.service.match_idea(&req.title, &req.description, req.top_n).await?;
    Ok(Json(result))
}

pub async fn preview_keywords(
    State(state): State<Arc<AppState>>,
    Json(req): Json<KeywordsRequest>,
) -> Json<KeywordPreview> {
    Json(state.service.preview_keywords(&req.text))
}
