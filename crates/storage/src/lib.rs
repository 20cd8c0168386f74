//! Storage layer for ideadup
//!
//! PostgreSQL storage (feature `postgres`, on by default) and an in-process
//! backend, both behind the [`IdeaStore`] / [`ClusterStore`] traits and the
//! [`StorageBackend`] enum.

mod backend;
pub mod error;
mod memory;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
pub use memory::MemoryStorage;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
pub use traits::{ClusterStore, IdeaStore};
