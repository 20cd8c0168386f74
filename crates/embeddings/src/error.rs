//! Failures of the embedding provider.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    /// The model name is unknown or its files could not be loaded.
    #[error("failed to load embedding model {model}: {reason}")]
    ModelInit { model: String, reason: String },
    /// An earlier inference panicked while holding the model.
    #[error("embedding model lock poisoned")]
    LockPoisoned,
    /// No vector came back for a non-empty input.
    #[error("embedding provider returned no vectors")]
    EmptyResult,
    #[error("embedding inference failed: {0}")]
    Generation(String),
    /// Wrong vector count, ragged dimensions or non-finite values.
    #[error("malformed embedding output: {0}")]
    Malformed(String),
}
