use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use ideadup_core::{Idea, IdeaInput, MAX_BATCH_IDEAS};

use crate::api_error::ApiError;
use crate::api_types::{DeleteResponse, MutationResponse, UpdateIdeaRequest};
use crate::AppState;

pub async fn add_idea(
    State(state): State<Arc<AppState>>,
    Json(input): Json<IdeaInput>,
) -> Result<Json<MutationResponse>, ApiError> {
    let input = input.trimmed();
    if input.idea_id.is_empty() {
        return Err(ApiError::BadRequest("idea_id must not be empty".to_owned()));
    }
    let _guard = state.write_lock.lock().await;
    if state.service.idea_exists(&input.idea_id).await? {
        return Err(ApiError::UnprocessableEntity(format!(
            "idea '{}' already exists, use PUT to update it",
            input.idea_id
        )));
    }
    let report = state.service.add_idea(&input).await?;
    Ok(Json(MutationResponse { success: true, idea_ids: vec![input.idea_id], report }))
}

pub async fn add_ideas_batch(
    State(state): State<Arc<AppState>>,
    Json(inputs): Json<Vec<IdeaInput>>,
) -> Result<Json<MutationResponse>, ApiError> {
    if inputs.is_empty() {
        return Err(ApiError::BadRequest("batch must not be empty".to_owned()));
    }
    if inputs.len() > MAX_BATCH_IDEAS {
        return Err(ApiError::BadRequest(format!(
            "batch of {} ideas exceeds the limit of {MAX_BATCH_IDEAS}",
            inputs.len()
        )));
    }
    let _guard = state.write_lock.lock().await;
    let report = state.service.add_ideas(&inputs).await?;
    let mut idea_ids: Vec<String> = Vec::with_capacity(inputs.len());
    for input in &inputs {
        let id = input.idea_id.trim();
        if !idea_ids.iter().any(|seen| seen == id) {
            idea_ids.push(id.to_owned());
        }
    }
    Ok(Json(MutationResponse { success: true, idea_ids, report }))
}

pub async fn get_idea(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Idea>, ApiError> {
    Ok(Json(state.service.get_idea(&id).await?))
}

pub async fn update_idea(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateIdeaRequest>,
) -> Result<Json<MutationResponse>, ApiError> {
    let _guard = state.write_lock.lock().await;
    let report = state.service.update_idea(&id, &req.title, &req.description).await?;
    Ok(Json(MutationResponse { success: true, idea_ids: vec![id.trim().to_owned()], report }))
}

pub async fn delete_idea(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let _guard = state.write_lock.lock().await;
    if !state.service.delete_idea(&id).await? {
        return Err(ApiError::NotFound(format!("idea '{id}' not found")));
    }
    Ok(Json(DeleteResponse { success: true, idea_id: id }))
}
