use std::collections::HashMap;

use ideadup_core::{clean_texts, extract_keywords_many, ClusteringReport, Idea, IdeaInput};
use ideadup_storage::IdeaStore;

use super::DedupService;
use crate::ServiceError;

impl DedupService {
    /// Adds or replaces a batch of ideas, then reclusters the corpus once.
    ///
    /// Keywords are extracted from each idea's combined text, stripped from
    /// it, and the cleaned texts are embedded in one provider call. A repeated
    /// id inside the batch keeps its last occurrence.
    pub async fn add_ideas(&self, inputs: &[IdeaInput]) -> Result<ClusteringReport, ServiceError> {
        let inputs = collapse_batch(inputs)?;
        if inputs.is_empty() {
            return Err(ServiceError::InvalidInput("no ideas given".to_owned()));
        }

        let texts: Vec<String> = inputs.iter().map(IdeaInput::combined_text).collect();
        let keywords = extract_keywords_many(&texts);
        let cleaned = clean_texts(&texts, &keywords);
        let embeddings = self.embed_texts(cleaned).await?;

        let ideas: Vec<Idea> = inputs
            .iter()
            .zip(keywords)
            .zip(embeddings)
            .map(|((input, kws), embedding)| Idea::new(input, kws, Some(embedding)))
            .collect();
        self.storage.upsert_ideas(&ideas).await?;
        tracing::info!(ideas = ideas.len(), "Ideas stored");

        self.process_clusters().await
    }

    /// Adds or replaces a single idea and reclusters.
    pub async fn add_idea(&self, input: &IdeaInput) -> Result<ClusteringReport, ServiceError> {
        self.add_ideas(std::slice::from_ref(input)).await
    }

    /// Replaces title and description of an existing idea, recomputing its
    /// keywords and embedding, then reclusters.
    pub async fn update_idea(
        &self,
        idea_id: &str,
        title: &str,
        description: &str,
    ) -> Result<ClusteringReport, ServiceError> {
        let idea_id = idea_id.trim();
        if !self.storage.idea_exists(idea_id).await? {
            return Err(ServiceError::NotFound(idea_id.to_owned()));
        }
        self.add_idea(&IdeaInput::new(idea_id, title, description)).await
    }

    /// Removes an idea and drops it from every stored subgroup in one storage
    /// call; subgroups left empty are deleted. Returns whether the idea existed.
    ///
    /// The remaining subgroups are not recomputed.
    pub async fn delete_idea(&self, idea_id: &str) -> Result<bool, ServiceError> {
        let idea_id = idea_id.trim();
        let Some(touched) = self.storage.delete_idea_cascade(idea_id).await? else {
            tracing::debug!(idea_id, "Delete of unknown idea");
            return Ok(false);
        };
        tracing::info!(idea_id, subgroups = touched, "Idea deleted");
        Ok(true)
    }
}

/// Trims every input, rejects empty ids and keeps the last occurrence of a
/// repeated id at the position of its first.
fn collapse_batch(inputs: &[IdeaInput]) -> Result<Vec<IdeaInput>, ServiceError> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut collapsed: Vec<IdeaInput> = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        let input = input.trimmed();
        if input.idea_id.is_empty() {
            return Err(ServiceError::InvalidInput(format!("idea at position {index} has an empty id")));
        }
        match positions.get(&input.idea_id) {
            Some(&at) => collapsed[at] = input,
            None => {
                positions.insert(input.idea_id.clone(), collapsed.len());
                collapsed.push(input);
            },
        }
    }
    Ok(collapsed)
}
