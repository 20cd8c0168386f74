use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by the clustering and ranking primitives.
///
/// Extraction, cleaning and keyword grouping never fail; only the vector
/// algorithms reject inputs they cannot interpret.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("length mismatch: {ids} ids but {embeddings} embeddings")]
    LengthMismatch { ids: usize, embeddings: usize },

    #[error("embedding at position {index} has dimension {actual}, expected {expected}")]
    DimensionMismatch { index: usize, expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = StdResult<T, CoreError>;
