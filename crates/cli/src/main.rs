use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use ideadup_core::{env_non_empty, DedupConfig};
use ideadup_embeddings::EmbeddingService;
use ideadup_service::DedupService;
use ideadup_storage::StorageBackend;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ideadup")]
#[command(about = "Duplicate detection for improvement ideas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Ingest a JSON-Lines file of ideas and recluster
    Import { file: PathBuf },
    /// Recompute all subgroups from the stored corpus
    Recluster,
    /// Find stored ideas similar to a new one
    Match {
        text: String,
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },
    /// Show the keywords extracted from a text and the cleaned text
    Keywords { text: String },
    /// Delete an idea and drop it from its subgroup
    Delete { id: String },
}

async fn connect_postgres(url: &str) -> Result<StorageBackend> {
    let storage =
        StorageBackend::new_postgres(url).await.context("failed to connect to DATABASE_URL")?;
    tracing::info!("Using PostgreSQL storage");
    Ok(storage)
}

/// Opens PostgreSQL when `DATABASE_URL` is set, otherwise an in-process store.
pub(crate) async fn open_storage() -> Result<StorageBackend> {
    match env_non_empty("DATABASE_URL") {
        Some(url) => connect_postgres(&url).await,
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage; ideas are lost on exit");
            Ok(StorageBackend::new_memory())
        },
    }
}

/// Opens PostgreSQL from `DATABASE_URL`. Commands that only read or edit the
/// stored corpus have nothing to work on in a fresh in-process store.
pub(crate) async fn open_persistent_storage() -> Result<StorageBackend> {
    let Some(url) = env_non_empty("DATABASE_URL") else {
        bail!("DATABASE_URL is not set; recluster, match and delete need a persistent corpus");
    };
    connect_postgres(&url).await
}

/// Storage, embedding model and configuration wired into one service.
pub(crate) async fn build_service(storage: StorageBackend) -> Result<DedupService> {
    let storage = Arc::new(storage);
    let embeddings = tokio::task::spawn_blocking(EmbeddingService::new)
        .await?
        .context("failed to initialize embedding model")?;
    tracing::info!(model = embeddings.model_name(), "Embedding service initialized");
    Ok(DedupService::new(storage, Arc::new(embeddings), DedupConfig::from_env()))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await?,
        Commands::Import { file } => commands::import::run(&file).await?,
        Commands::Recluster => commands::corpus::run_recluster().await?,
        Commands::Match { text, top_n } => commands::corpus::run_match(&text, top_n).await?,
        Commands::Keywords { text } => commands::corpus::run_keywords(&text)?,
        Commands::Delete { id } => commands::corpus::run_delete(&id).await?,
    }

    Ok(())
}
