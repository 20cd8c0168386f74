use std::collections::HashMap;

use ideadup_core::{
    build_subgroups, cluster_embeddings, split_duplicates_and_uniques, ClusteringReport, Idea,
};
use ideadup_storage::{ClusterStore, IdeaStore};

use super::DedupService;
use crate::ServiceError;

impl DedupService {
    /// Recomputes every subgroup from the whole corpus and replaces the stored ones.
    ///
    /// Ideas without an embedding, or whose embedding size differs from the
    /// corpus majority, are left out with a warning. An empty corpus stores
    /// no subgroups.
    pub async fn process_clusters(&self) -> Result<ClusteringReport, ServiceError> {
        let ideas = self.storage.list_ideas().await?;
        let (usable, skipped) = usable_ideas(ideas);

        let config = self.config;
        let (subgroups, mut report) = tokio::task::spawn_blocking(move || {
            let ids: Vec<String> = usable.iter().map(|i| i.idea_id.clone()).collect();
            let keywords: Vec<Vec<String>> = usable.iter().map(|i| i.keywords.clone()).collect();
            let embeddings: Vec<&[f32]> =
                usable.iter().filter_map(Idea::usable_embedding).collect();

            let labels = cluster_embeddings(&ids, &embeddings, config.eps, config.min_samples)?;
            let split = split_duplicates_and_uniques(&labels);
            let subgroups = build_subgroups(&ids, &keywords, &split, config.keyword_threshold);
            let report = ClusteringReport {
                ideas: ids.len(),
                skipped: 0,
                duplicate_clusters: split.duplicate_groups.len(),
                uniques: split.uniques.len(),
                subgroups: subgroups.len(),
            };
            Ok::<_, ServiceError>((subgroups, report))
        })
        .await??;
        report.skipped = skipped;

        self.storage.replace_clusters(&subgroups).await?;
        tracing::info!(
            ideas = report.ideas,
            skipped = report.skipped,
            duplicate_clusters = report.duplicate_clusters,
            uniques = report.uniques,
            subgroups = report.subgroups,
            "Clusters rebuilt"
        );
        Ok(report)
    }
}

/// Ideas fit for clustering, and how many were dropped.
fn usable_ideas(ideas: Vec<Idea>) -> (Vec<Idea>, usize) {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    let mut first_seen: Vec<usize> = Vec::new();
    for dim in ideas.iter().filter_map(|i| i.usable_embedding().map(<[f32]>::len)) {
        let count = counts.entry(dim).or_insert(0);
        if *count == 0 {
            first_seen.push(dim);
        }
        *count = count.saturating_add(1);
    }
    // Majority dimension; the earlier seen one wins a tie.
    let dimension = first_seen.iter().copied().fold(None, |best: Option<usize>, dim| match best {
        Some(b) if counts[&b] >= counts[&dim] => Some(b),
        _ => Some(dim),
    });

    let total = ideas.len();
    let usable: Vec<Idea> = ideas
        .into_iter()
        .filter(|idea| match idea.usable_embedding() {
            Some(e) if Some(e.len()) == dimension => true,
            Some(e) => {
                tracing::warn!(idea_id = %idea.idea_id, dimension = e.len(), "Embedding size differs from corpus, skipped");
                false
            },
            None => {
                tracing::warn!(idea_id = %idea.idea_id, "Idea has no embedding, skipped");
                false
            },
        })
        .collect();
    let skipped = total.saturating_sub(usable.len());
    (usable, skipped)
}
