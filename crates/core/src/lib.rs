//! Core types and algorithms for ideadup
//!
//! Everything in this crate is pure and synchronous: keyword extraction,
//! text cleaning, density clustering over embeddings, keyword subgrouping
//! and the ranking primitives used when matching a new idea. Storage and
//! the embedding model live in other crates.

mod cleaner;
mod cluster;
mod config;
mod constants;
mod dbscan;
mod env_config;
mod error;
mod grouping;
mod idea;
mod keywords;
mod matching;
mod similarity;
#[cfg(test)]
mod similarity_tests;

pub use cleaner::*;
pub use cluster::*;
pub use config::*;
pub use constants::*;
pub use dbscan::*;
pub use env_config::*;
pub use error::*;
pub use grouping::*;
pub use idea::*;
pub use keywords::*;
pub use matching::*;
pub use similarity::*;
