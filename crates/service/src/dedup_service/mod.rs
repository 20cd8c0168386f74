mod clustering;
mod ingest;
mod matching;

use std::sync::Arc;

use ideadup_core::{clean_text, extract_keywords, DedupConfig, Idea, Subgroup};
use ideadup_embeddings::{EmbeddingError, EmbeddingProvider};
use ideadup_storage::{ClusterStore, IdeaStore, StorageBackend};
use serde::Serialize;

use crate::ServiceError;

/// Keywords of a text and the text as it is embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordPreview {
    pub keywords: Vec<String>,
    pub cleaned_text: String,
}

impl KeywordPreview {
    /// Keyword extraction and cleaning without touching the model or storage.
    #[must_use]
    pub fn of(text: &str) -> Self {
        let keywords = extract_keywords(text);
        let cleaned_text = clean_text(text, &keywords);
        Self { keywords, cleaned_text }
    }
}

/// Orchestrates extraction, embedding, clustering and storage of ideas.
///
/// Mutating calls assume a single writer; callers serialize them.
pub struct DedupService {
    pub(crate) storage: Arc<StorageBackend>,
    pub(crate) embeddings: Arc<dyn EmbeddingProvider>,
    pub(crate) config: DedupConfig,
}

impl DedupService {
    #[must_use]
    pub fn new(
        storage: Arc<StorageBackend>,
        embeddings: Arc<dyn EmbeddingProvider>,
        config: DedupConfig,
    ) -> Self {
        let config = config.clamped();
        tracing::debug!(
            backend = storage.kind(),
            eps = config.eps,
            min_samples = config.min_samples,
            keyword_threshold = config.keyword_threshold,
            "DedupService created"
        );
        Self { storage, embeddings, config }
    }

    #[must_use]
    pub const fn config(&self) -> &DedupConfig {
        &self.config
    }

    pub async fn idea_exists(&self, idea_id: &str) -> Result<bool, ServiceError> {
        Ok(self.storage.idea_exists(idea_id.trim()).await?)
    }

    pub async fn get_idea(&self, idea_id: &str) -> Result<Idea, ServiceError> {
        self.storage
            .get_idea(idea_id.trim())
            .await?
            .ok_or_else(|| ServiceError::NotFound(idea_id.trim().to_owned()))
    }

    pub async fn list_clusters(&self) -> Result<Vec<Subgroup>, ServiceError> {
        Ok(self.storage.list_clusters().await?)
    }

    pub async fn count_ideas(&self) -> Result<usize, ServiceError> {
        Ok(self.storage.count_ideas().await?)
    }

    #[must_use]
    pub fn preview_keywords(&self, text: &str) -> KeywordPreview {
        KeywordPreview::of(text)
    }

    /// Embeds `texts` on a blocking thread and checks the provider's output.
    pub(crate) async fn embed_texts(&self, texts: Vec<String>) -> Result<Vec<Vec<f32>>, ServiceError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let expected = texts.len();
        let provider = Arc::clone(&self.embeddings);
        let vectors = tokio::task::spawn_blocking(move || provider.embed_batch(&texts)).await??;
        validate_embeddings(&vectors, expected)?;
        Ok(vectors)
    }
}

/// Rejects output that does not hold one finite, equally sized vector per text.
fn validate_embeddings(vectors: &[Vec<f32>], expected: usize) -> Result<(), EmbeddingError> {
    if vectors.len() != expected {
        return Err(EmbeddingError::Malformed(format!(
            "expected {expected} vectors, got {}",
            vectors.len()
        )));
    }
    let Some(dimension) = vectors.first().map(Vec::len) else {
        return Ok(());
    };
    if dimension == 0 {
        return Err(EmbeddingError::Malformed("zero-dimension vector".to_owned()));
    }
    for (index, vector) in vectors.iter().enumerate() {
        if vector.len() != dimension {
            return Err(EmbeddingError::Malformed(format!(
                "vector {index} has dimension {}, expected {dimension}",
                vector.len()
            )));
        }
        if vector.iter().any(|x| !x.is_finite()) {
            return Err(EmbeddingError::Malformed(format!("vector {index} has non-finite values")));
        }
    }
    Ok(())
}
