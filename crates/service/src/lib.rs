//! Service layer for ideadup
//!
//! Centralizes the deduplication workflow between the HTTP/CLI front ends
//! and storage/embeddings.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short error vars are idiomatic")]

mod dedup_service;
mod error;

pub use dedup_service::{DedupService, KeywordPreview};
pub use error::ServiceError;
