//! Idea records: the unit of deduplication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// A submitted idea before keywords and embedding are derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaInput {
    /// Externally assigned identifier.
    pub idea_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl IdeaInput {
    #[must_use]
    pub fn new(
        idea_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self { idea_id: idea_id.into(), title: title.into(), description: description.into() }
    }

    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            idea_id: self.idea_id.trim().to_owned(),
            title: self.title.trim().to_owned(),
            description: self.description.trim().to_owned(),
        }
    }

    /// Text that keywords and the embedding are derived from.
    #[must_use]
    pub fn combined_text(&self) -> String {
        combined_text(&self.title, &self.description)
    }
}

/// Joins title and description into the text used for extraction and embedding.
///
/// Input is NFC-normalized so decomposed Cyrillic (`и` + combining breve)
/// tokenizes the same as its precomposed form.
#[must_use]
pub fn combined_text(title: &str, description: &str) -> String {
    let joined = format!("{} {}", title.trim(), description.trim());
    joined.trim().nfc().collect()
}

/// A stored idea with its derived features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Idea {
    pub idea_id: String,
    pub title: String,
    pub description: String,
    /// Ordered, deduplicated keywords extracted from the combined text.
    pub keywords: Vec<String>,
    /// Embedding of the cleaned combined text. `None` marks a malformed record.
    pub embedding: Option<Vec<f32>>,
    pub updated_at: DateTime<Utc>,
}

impl Idea {
    #[must_use]
    pub fn new(
        input: &IdeaInput,
        keywords: Vec<String>,
        embedding: Option<Vec<f32>>,
    ) -> Self {
        Self {
            idea_id: input.idea_id.clone(),
            title: input.title.clone(),
            description: input.description.clone(),
            keywords,
            embedding,
            updated_at: Utc::now(),
        }
    }

    /// Title and description as shown to a reviewer in match results.
    #[must_use]
    pub fn full_text(&self) -> String {
        format!("{} {}", self.title.trim(), self.description.trim())
    }

    /// Embedding, if present and non-empty.
    #[must_use]
    pub fn usable_embedding(&self) -> Option<&[f32]> {
        self.embedding.as_deref().filter(|e| !e.is_empty())
    }
}
