//! Tunable parameters of the deduplication pipeline.

use serde::{Deserialize, Serialize};

use crate::{
    env_parse_with_default, DEFAULT_CLUSTER_EPS, DEFAULT_CLUSTER_MIN_SAMPLES,
    DEFAULT_KEYWORD_THRESHOLD, DEFAULT_MATCH_TOP_N, MAX_TOP_N,
};

/// Parameters for coarse clustering, fine grouping and matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DedupConfig {
    /// Maximum cosine distance between neighbours in coarse clustering.
    pub eps: f64,
    /// Minimum neighbourhood size (self included) for a core idea.
    pub min_samples: usize,
    /// Jaccard percentage (0–100) needed to join a keyword subgroup.
    pub keyword_threshold: f64,
    /// Number of ranked ideas returned by a match query.
    pub top_n: usize,
}

impl Default for DedupConfig {
    fn default() -> Self {
        Self {
            eps: DEFAULT_CLUSTER_EPS,
            min_samples: DEFAULT_CLUSTER_MIN_SAMPLES,
            keyword_threshold: DEFAULT_KEYWORD_THRESHOLD,
            top_n: DEFAULT_MATCH_TOP_N,
        }
    }
}

impl DedupConfig {
    /// Reads `IDEADUP_CLUSTER_EPS`, `IDEADUP_CLUSTER_MIN_SAMPLES`,
    /// `IDEADUP_KEYWORD_THRESHOLD` and `IDEADUP_MATCH_TOP_N`, falling back to
    /// defaults, then clamps every value into its valid range.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            eps: env_parse_with_default("IDEADUP_CLUSTER_EPS", DEFAULT_CLUSTER_EPS),
            min_samples: env_parse_with_default(
                "IDEADUP_CLUSTER_MIN_SAMPLES",
                DEFAULT_CLUSTER_MIN_SAMPLES,
            ),
            keyword_threshold: env_parse_with_default(
                "IDEADUP_KEYWORD_THRESHOLD",
                DEFAULT_KEYWORD_THRESHOLD,
            ),
            top_n: env_parse_with_default("IDEADUP_MATCH_TOP_N", DEFAULT_MATCH_TOP_N),
        }
        .clamped()
    }

    /// Returns a copy with every parameter forced into range, warning on each change.
    #[must_use]
    pub fn clamped(self) -> Self {
        let eps = if self.eps.is_finite() && self.eps > 0.0 {
            self.eps.min(2.0)
        } else {
            DEFAULT_CLUSTER_EPS
        };
        if (eps - self.eps).abs() > f64::EPSILON || self.eps.is_nan() {
            tracing::warn!(original = self.eps, clamped = eps, "cluster eps clamped to (0, 2]");
        }

        let min_samples = self.min_samples.max(1);
        if min_samples != self.min_samples {
            tracing::warn!(
                original = self.min_samples,
                clamped = min_samples,
                "cluster min_samples raised to 1"
            );
        }

        let keyword_threshold = if self.keyword_threshold.is_nan() {
            DEFAULT_KEYWORD_THRESHOLD
        } else {
            self.keyword_threshold.clamp(0.0, 100.0)
        };
        if (keyword_threshold - self.keyword_threshold).abs() > f64::EPSILON
            || self.keyword_threshold.is_nan()
        {
            tracing::warn!(
                original = self.keyword_threshold,
                clamped = keyword_threshold,
                "keyword threshold clamped to [0, 100]"
            );
        }

        let top_n = self.top_n.clamp(1, MAX_TOP_N);
        if top_n != self.top_n {
            tracing::warn!(original = self.top_n, clamped = top_n, "match top_n clamped");
        }

        Self { eps, min_samples, keyword_threshold, top_n }
    }
}
