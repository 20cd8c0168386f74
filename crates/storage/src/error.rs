//! Errors raised by the storage backends.

use thiserror::Error;

/// PostgreSQL SQLSTATE for `unique_violation`.
#[cfg(feature = "postgres")]
const UNIQUE_VIOLATION: &str = "23505";

/// PostgreSQL SQLSTATE for `serialization_failure`.
#[cfg(feature = "postgres")]
const SERIALIZATION_FAILURE: &str = "40001";

#[derive(Debug, Error)]
pub enum StorageError {
    /// A row the caller expected is missing.
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// A unique key was already taken.
    #[error("already exists: {0}")]
    Duplicate(String),

    #[cfg(feature = "postgres")]
    #[error("database failure: {0}")]
    Database(#[source] sqlx::Error),

    /// A stored value does not fit the domain type.
    #[error("corrupt stored data ({context})")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("schema setup failed: {0}")]
    Migration(String),
}

impl StorageError {
    /// Pool exhaustion, dropped connections and serialization conflicts;
    /// a retry may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        #[cfg(feature = "postgres")]
        if let Self::Database(err) = self {
            return match err {
                sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => true,
                sqlx::Error::Database(db) => db.code().is_some_and(|c| c == SERIALIZATION_FAILURE),
                _ => false,
            };
        }
        false
    }

    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Unique violations become `Duplicate` and a missing row becomes `NotFound`;
/// callers that know the entity remap the latter with a proper id.
#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return Self::NotFound { entity: "row", id: String::new() };
        }
        if let sqlx::Error::Database(db) = &err {
            if db.code().is_some_and(|c| c == UNIQUE_VIOLATION) {
                return Self::Duplicate(db.message().to_owned());
            }
        }
        Self::Database(err)
    }
}
