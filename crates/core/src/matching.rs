//! Ranking primitives for matching a new idea against the corpus.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{cosine_similarity, mean_vector, to_percent, Idea, Subgroup};

/// A stored idea ranked against a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarIdea {
    pub idea_id: String,
    /// Title and description as stored.
    pub full_text: String,
    /// Cosine similarity as a percentage with two decimals.
    pub similarity: f64,
}

/// The subgroup whose mean embedding is closest to a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestCluster {
    pub cluster_id: String,
    pub idea_ids: Vec<String>,
    pub similarity: f64,
}

/// Outcome of matching one new idea.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub keywords: Vec<String>,
    /// Most similar stored ideas, best first.
    pub similar: Vec<SimilarIdea>,
    /// `None` when no subgroup has a usable embedding.
    pub best_cluster: Option<BestCluster>,
}

/// Ranks `corpus` by cosine similarity to `query` and keeps the best `top_n`.
///
/// Ideas without an embedding are skipped. Equal scores keep corpus order.
/// Reported similarities lie in [0, 100].
#[must_use]
pub fn rank_similar(query: &[f32], corpus: &[Idea], top_n: usize) -> Vec<SimilarIdea> {
    let mut scored: Vec<(&Idea, f64)> = corpus
        .iter()
        .filter_map(|idea| {
            let embedding = idea.usable_embedding()?;
            Some((idea, cosine_similarity(query, embedding)))
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored
        .into_iter()
        .take(top_n)
        .map(|(idea, score)| SimilarIdea {
            idea_id: idea.idea_id.clone(),
            full_text: idea.full_text(),
            similarity: similarity_percent(score),
        })
        .collect()
}

/// Finds the subgroup whose mean member embedding is most similar to `query`.
///
/// Members missing from `corpus` or lacking an embedding are left out of the
/// mean; a subgroup with no usable member is skipped. Any scored subgroup
/// beats none, and the first subgroup wins a tie.
#[must_use]
pub fn best_cluster(query: &[f32], corpus: &[Idea], subgroups: &[Subgroup]) -> Option<BestCluster> {
    let embeddings: HashMap<&str, &[f32]> = corpus
        .iter()
        .filter_map(|idea| Some((idea.idea_id.as_str(), idea.usable_embedding()?)))
        .collect();

    let mut best: Option<(&Subgroup, f64)> = None;
    for subgroup in subgroups {
        let vectors: Vec<&[f32]> =
            subgroup.members.iter().filter_map(|id| embeddings.get(id.as_str()).copied()).collect();
        let Some(mean) = mean_vector(&vectors) else {
            if !vectors.is_empty() {
                tracing::warn!(cluster_id = %subgroup.cluster_id, "members disagree on embedding size, skipped");
            }
            continue;
        };
        let score = cosine_similarity(query, &mean);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((subgroup, score));
        }
    }
    best.map(|(subgroup, score)| BestCluster {
        cluster_id: subgroup.cluster_id.clone(),
        idea_ids: subgroup.members.clone(),
        similarity: similarity_percent(score),
    })
}

/// Percentage shown to callers; opposed vectors count as 0.
fn similarity_percent(score: f64) -> f64 {
    to_percent(score.max(0.0))
}
