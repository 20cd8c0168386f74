use ideadup_core::{ClusteringReport, Subgroup};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct UpdateIdeaRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub top_n: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct KeywordsRequest {
    pub text: String,
}

/// Result of a mutation that reclustered the corpus.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub success: bool,
    pub idea_ids: Vec<String>,
    pub report: ClusteringReport,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub idea_id: String,
}

#[derive(Debug, Serialize)]
pub struct ClustersResponse {
    pub total: usize,
    pub clusters: Vec<Subgroup>,
}
