//! Sentence embeddings for idea deduplication
//!
//! [`EmbeddingProvider`] is the contract the deduplication service depends on:
//! ordered batch in, one fixed-dimension vector per text out.
//! [`EmbeddingService`] implements it with a local ONNX model via fastembed,
//! so no text leaves the host.

mod error;

use std::sync::Mutex;

use fastembed::{EmbeddingModel, TextEmbedding, TextInitOptions};

pub use error::EmbeddingError;

/// Model used when `IDEADUP_EMBEDDING_MODEL` is unset.
pub const DEFAULT_MODEL_NAME: &str = "paraphrase-multilingual-mpnet-base-v2";

/// Maps texts to embedding vectors.
///
/// Implementations must return exactly one vector per input, in input order,
/// with the same dimension on every call. Calls are blocking; async callers
/// run them on a blocking thread.
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds every text of `texts`.
    ///
    /// # Errors
    /// Returns `EmbeddingError` when the backend is unavailable or its output
    /// cannot be used.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError>;

    /// Embeds a single text.
    ///
    /// # Errors
    /// See [`EmbeddingProvider::embed_batch`].
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed_batch(&[text.to_owned()])?.into_iter().next().ok_or(EmbeddingError::EmptyResult)
    }
}

/// Resolves a model name as accepted in `IDEADUP_EMBEDDING_MODEL`.
#[must_use]
pub fn model_from_name(name: &str) -> Option<EmbeddingModel> {
    match name.trim().to_ascii_lowercase().as_str() {
        "paraphrase-multilingual-mpnet-base-v2" => Some(EmbeddingModel::ParaphraseMLMpnetBaseV2),
        "multilingual-e5-small" => Some(EmbeddingModel::MultilingualE5Small),
        "multilingual-e5-base" => Some(EmbeddingModel::MultilingualE5Base),
        "all-minilm-l6-v2" => Some(EmbeddingModel::AllMiniLML6V2),
        _ => None,
    }
}

/// Local fastembed model behind a mutex; inference needs exclusive access.
pub struct EmbeddingService {
    model: Mutex<TextEmbedding>,
    model_name: String,
}

impl EmbeddingService {
    /// Loads the model named by `IDEADUP_EMBEDDING_MODEL`, or the default.
    ///
    /// An unknown name falls back to the default with a warning. The first
    /// call downloads the model into the fastembed cache.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelInit` if the model cannot be loaded.
    pub fn new() -> Result<Self, EmbeddingError> {
        let requested =
            std::env::var("IDEADUP_EMBEDDING_MODEL").unwrap_or_else(|_| DEFAULT_MODEL_NAME.to_owned());
        let name = if model_from_name(&requested).is_some() {
            requested
        } else {
            tracing::warn!(
                requested = %requested,
                fallback = DEFAULT_MODEL_NAME,
                "Unknown embedding model, using default"
            );
            DEFAULT_MODEL_NAME.to_owned()
        };
        Self::with_model_name(&name)
    }

    /// Loads a specific model.
    ///
    /// # Errors
    /// Returns `EmbeddingError::ModelInit` for an unknown name or a load failure.
    pub fn with_model_name(name: &str) -> Result<Self, EmbeddingError> {
        let model = model_from_name(name).ok_or_else(|| EmbeddingError::ModelInit {
            model: name.to_owned(),
            reason: "unknown model name".to_owned(),
        })?;
        tracing::info!(model = name, "Loading embedding model");
        let embedding = TextEmbedding::try_new(
            TextInitOptions::new(model).with_show_download_progress(false),
        )
        .map_err(|e| EmbeddingError::ModelInit { model: name.to_owned(), reason: e.to_string() })?;
        Ok(Self { model: Mutex::new(embedding), model_name: name.to_owned() })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

impl EmbeddingProvider for EmbeddingService {
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        let mut guard = self.model.lock().map_err(|_| EmbeddingError::LockPoisoned)?;
        let embeddings = guard
            .embed(texts.to_vec(), None)
            .map_err(|e| EmbeddingError::Generation(e.to_string()))?;
        if embeddings.is_empty() {
            return Err(EmbeddingError::EmptyResult);
        }
        tracing::debug!(texts = texts.len(), dimension = embeddings[0].len(), "Embedded batch");
        Ok(embeddings)
    }
}
