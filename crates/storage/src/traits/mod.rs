//! Storage backend trait abstraction
//!
//! Async domain traits for the idea corpus and the stored subgroups, so the
//! service works the same over PostgreSQL and the in-memory backend.

pub mod cluster;
pub mod idea;

pub use cluster::ClusterStore;
pub use idea::IdeaStore;
