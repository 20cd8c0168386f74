//! HTTP API server for ideadup.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod api_types;
mod handlers;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::limit::RequestBodyLimitLayer;

use ideadup_service::DedupService;

pub use api_types::VersionResponse;

/// Largest accepted request body; a full batch of long ideas fits.
pub const MAX_REQUEST_BODY_BYTES: usize = 32 * 1024 * 1024;

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Deduplication workflow over the configured storage and model
    pub service: Arc<DedupService>,
    /// Held by every mutating handler; reclustering assumes a single writer
    pub write_lock: Mutex<()>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<DedupService>) -> Self {
        Self { service, write_lock: Mutex::new(()) }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/version", get(version))
        .route("/api/ideas", post(handlers::ideas::add_idea))
        .route("/api/ideas/batch", post(handlers::ideas::add_ideas_batch))
        .route(
            "/api/ideas/{id}",
            get(handlers::ideas::get_idea)
                .put(handlers::ideas::update_idea)
                .delete(handlers::ideas::delete_idea),
        )
        .route("/api/match", post(handlers::matching::match_idea))
        .route("/api/keywords", post(handlers::matching::preview_keywords))
        .route("/api/clusters", get(handlers::clusters::list_clusters))
        .route("/api/clusters/rebuild", post(handlers::clusters::rebuild_clusters))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
