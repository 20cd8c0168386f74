use ideadup_core::{
    best_cluster, clean_text, combined_text, extract_keywords, rank_similar, MatchResult, MAX_TOP_N,
};
use ideadup_embeddings::EmbeddingError;
use ideadup_storage::{ClusterStore, IdeaStore};

use super::DedupService;
use crate::ServiceError;

impl DedupService {
    /// Matches an unseen idea against the stored corpus and subgroups.
    ///
    /// The text goes through the same extraction, cleaning and embedding as
    /// stored ideas. `top_n` defaults to the configured value and is clamped
    /// to `1..=MAX_TOP_N`. An empty corpus yields an empty result.
    pub async fn match_idea(
        &self,
        title: &str,
        description: &str,
        top_n: Option<usize>,
    ) -> Result<MatchResult, ServiceError> {
        let top_n = top_n.unwrap_or(self.config.top_n).clamp(1, MAX_TOP_N);
        let text = combined_text(title, description);
        let keywords = extract_keywords(&text);

        let corpus = self.storage.list_ideas().await?;
        if corpus.is_empty() {
            tracing::debug!("Match against empty corpus");
            return Ok(MatchResult { keywords, ..MatchResult::default() });
        }
        let subgroups = self.storage.list_clusters().await?;

        let cleaned = clean_text(&text, &keywords);
        let query = self
            .embed_texts(vec![cleaned])
            .await?
            .into_iter()
            .next()
            .ok_or(EmbeddingError::EmptyResult)?;

        let (similar, best) = tokio::task::spawn_blocking(move || {
            let similar = rank_similar(&query, &corpus, top_n);
            let best = best_cluster(&query, &corpus, &subgroups);
            (similar, best)
        })
        .await?;
        tracing::debug!(
            candidates = similar.len(),
            best_cluster = best.as_ref().map(|b| b.cluster_id.as_str()),
            "Idea matched"
        );
        Ok(MatchResult { keywords, similar, best_cluster: best })
    }
}
