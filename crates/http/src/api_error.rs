//! Error type returned by every handler.
//!
//! Each variant carries the message sent to the client as `{"error": "..."}`.
//! Internal failures are logged in full and answered with a fixed message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ideadup_service::ServiceError;
use ideadup_storage::StorageError;
use serde::Serialize;

const INTERNAL_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub enum ApiError {
    /// Malformed or out-of-range request (400).
    BadRequest(String),
    /// Unknown idea id (404).
    NotFound(String),
    /// Well-formed but refused, e.g. POST of an id that already exists (422).
    UnprocessableEntity(String),
    /// Anything unexpected, model failures included (500).
    Internal(anyhow::Error),
    /// Storage pool exhausted or unreachable (503).
    ServiceUnavailable(String),
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ApiError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::BadRequest(m)
            | Self::NotFound(m)
            | Self::UnprocessableEntity(m)
            | Self::ServiceUnavailable(m) => m,
            Self::Internal(_) => INTERNAL_MESSAGE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(err) = &self {
            tracing::error!(error = ?err, "request failed");
        }
        (self.status(), Json(ErrorBody { error: self.message() })).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(id) => Self::NotFound(format!("idea '{id}' not found")),
            ServiceError::Storage(StorageError::NotFound { entity, id }) => {
                Self::NotFound(format!("{entity} '{id}' not found"))
            },
            ServiceError::InvalidInput(msg) => Self::BadRequest(msg),
            err if err.is_duplicate() => Self::UnprocessableEntity(err.to_string()),
            err if err.is_transient() => {
                tracing::warn!(error = %err, "storage temporarily unavailable");
                Self::ServiceUnavailable("storage temporarily unavailable".to_owned())
            },
            err => Self::Internal(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ideadup_embeddings::EmbeddingError;

    #[test]
    fn service_errors_map_to_statuses() {
        let cases = [
            (ServiceError::NotFound("7".into()), StatusCode::NOT_FOUND),
            (ServiceError::InvalidInput("empty id".into()), StatusCode::BAD_REQUEST),
            (
                ServiceError::Storage(StorageError::Duplicate("idea_id".into())),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ServiceError::Embedding(EmbeddingError::Generation("oom".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn internal_message_hides_details() {
        let err = ApiError::Internal(anyhow::anyhow!("connection string leaked"));
        assert_eq!(err.message(), INTERNAL_MESSAGE);
    }
}
