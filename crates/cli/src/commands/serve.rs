use anyhow::Result;
use ideadup_http::{create_router, AppState};
use std::sync::Arc;

use crate::{build_service, open_storage};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let service = Arc::new(build_service(open_storage().await?).await?);
    let ideas = service.count_ideas().await?;
    let config = service.config();
    tracing::info!(
        ideas,
        eps = config.eps,
        min_samples = config.min_samples,
        keyword_threshold = config.keyword_threshold,
        top_n = config.top_n,
        "Corpus loaded"
    );

    let router = create_router(Arc::new(AppState::new(service)));
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
