//! Coarse density clustering of idea embeddings (DBSCAN over cosine distance).

use crate::{cosine_distance, CoreError, Result, NOISE_LABEL};

/// Cluster label assigned to one idea by a single clustering run.
///
/// Label numbers are only meaningful within that run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLabel {
    pub idea_id: String,
    /// Non-negative cluster number, or [`NOISE_LABEL`].
    pub label: i64,
}

impl ClusterLabel {
    #[must_use]
    pub const fn is_noise(&self) -> bool {
        self.label == NOISE_LABEL
    }
}

/// Labels every idea with a coarse cluster, pairing `ids` with `embeddings` by position.
///
/// Two ideas are neighbours when their cosine distance is at most `eps`; an
/// idea whose neighbourhood (itself included) holds at least `min_samples`
/// ideas seeds or extends a cluster. Everything unreachable from such a core
/// idea is noise. Clusters are numbered in the order their first core idea
/// appears, so a fixed input order always produces the same labels.
///
/// # Errors
/// `LengthMismatch` when the inputs differ in length, `DimensionMismatch`
/// when an embedding disagrees with the first one, `InvalidParameter` for a
/// non-positive or non-finite `eps` or a zero `min_samples`.
pub fn cluster_embeddings<E: AsRef<[f32]>>(
    ids: &[String],
    embeddings: &[E],
    eps: f64,
    min_samples: usize,
) -> Result<Vec<ClusterLabel>> {
    if ids.len() != embeddings.len() {
        return Err(CoreError::LengthMismatch { ids: ids.len(), embeddings: embeddings.len() });
    }
    let labels = dbscan_labels(embeddings, eps, min_samples)?;
    Ok(ids
        .iter()
        .zip(labels)
        .map(|(idea_id, label)| ClusterLabel { idea_id: idea_id.clone(), label })
        .collect())
}

/// Raw DBSCAN labels in input order.
///
/// # Errors
/// See [`cluster_embeddings`].
pub fn dbscan_labels<E: AsRef<[f32]>>(
    embeddings: &[E],
    eps: f64,
    min_samples: usize,
) -> Result<Vec<i64>> {
    if !eps.is_finite() || eps <= 0.0 {
        return Err(CoreError::InvalidParameter(format!("eps must be positive, got {eps}")));
    }
    if min_samples == 0 {
        return Err(CoreError::InvalidParameter("min_samples must be at least 1".to_owned()));
    }
    validate_dimensions(embeddings)?;

    let points: Vec<&[f32]> = embeddings.iter().map(AsRef::as_ref).collect();
    let neighborhoods: Vec<Vec<usize>> = (0..points.len())
        .map(|i| {
            (0..points.len())
                .filter(|&j| i == j || cosine_distance(points[i], points[j]) <= eps)
                .collect()
        })
        .collect();
    let is_core: Vec<bool> = neighborhoods.iter().map(|n| n.len() >= min_samples).collect();

    let mut labels = vec![NOISE_LABEL; points.len()];
    let mut next_label: i64 = 0;
    let mut stack: Vec<usize> = Vec::new();
    for start in 0..points.len() {
        if labels[start] != NOISE_LABEL || !is_core[start] {
            continue;
        }
        let mut current = start;
        loop {
            if labels[current] == NOISE_LABEL {
                labels[current] = next_label;
                if is_core[current] {
                    stack.extend(
                        neighborhoods[current].iter().copied().filter(|&j| labels[j] == NOISE_LABEL),
                    );
                }
            }
            match stack.pop() {
                Some(next) => current = next,
                None => break,
            }
        }
        next_label += 1;
    }
    Ok(labels)
}

fn validate_dimensions<E: AsRef<[f32]>>(embeddings: &[E]) -> Result<()> {
    let Some(first) = embeddings.first() else {
        return Ok(());
    };
    let expected = first.as_ref().len();
    for (index, embedding) in embeddings.iter().enumerate() {
        let actual = embedding.as_ref().len();
        if actual != expected {
            return Err(CoreError::DimensionMismatch { index, expected, actual });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("id{i}")).collect()
    }

    #[test]
    fn identical_embeddings_share_a_cluster() {
        let embeddings = vec![vec![1.0_f32, 0.2, 0.0], vec![1.0, 0.2, 0.0]];
        let labels = cluster_embeddings(&ids(2), &embeddings, 0.25, 2).unwrap();
        assert_eq!(labels[0].label, 0);
        assert_eq!(labels[1].label, 0);
        assert!(!labels[0].is_noise());
    }

    #[test]
    fn isolated_points_are_noise() {
        let embeddings = vec![vec![1.0_f32, 0.0], vec![0.0, 1.0], vec![-1.0, 0.0]];
        let labels = dbscan_labels(&embeddings, 0.25, 2).unwrap();
        assert_eq!(labels, vec![NOISE_LABEL; 3]);
    }

    #[test]
    fn clusters_are_numbered_by_first_core_point() {
        let embeddings = vec![
            vec![0.0_f32, 1.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.01],
            vec![-1.0, 0.0],
        ];
        let labels = dbscan_labels(&embeddings, 0.1, 2).unwrap();
        assert_eq!(labels, vec![0, 1, 0, 1, NOISE_LABEL]);
    }

    #[test]
    fn chain_is_expanded_through_core_points() {
        // consecutive angles 0.3 rad apart: neighbours pairwise, ends far apart
        let embeddings: Vec<Vec<f32>> = (0..4)
            .map(|k| {
                let a = 0.3_f32 * k as f32;
                vec![a.cos(), a.sin()]
            })
            .collect();
        let labels = dbscan_labels(&embeddings, 0.05, 2).unwrap();
        assert_eq!(labels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn border_point_reached_from_core_joins_cluster() {
        // 3 lies within eps of 2 only: not core itself, reached through 2.
        let embeddings: Vec<Vec<f32>> = [0.0_f32, 0.1, 0.2, 0.5]
            .iter()
            .map(|a| vec![a.cos(), a.sin()])
            .collect();
        let labels = dbscan_labels(&embeddings, 1.0 - 0.3_f64.cos() + 1e-6, 3).unwrap();
        assert_eq!(labels, vec![0, 0, 0, 0]);
    }

    #[test]
    fn min_samples_one_makes_every_point_a_cluster() {
        let embeddings = vec![vec![1.0_f32, 0.0], vec![0.0, 1.0]];
        let labels = dbscan_labels(&embeddings, 0.25, 1).unwrap();
        assert_eq!(labels, vec![0, 1]);
    }

    #[test]
    fn deterministic_for_fixed_input() {
        let embeddings = vec![vec![1.0_f32, 0.0], vec![0.9, 0.1], vec![0.0, 1.0], vec![0.1, 0.9]];
        let a = dbscan_labels(&embeddings, 0.25, 2).unwrap();
        let b = dbscan_labels(&embeddings, 0.25, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_corpus_yields_no_labels() {
        let embeddings: Vec<Vec<f32>> = Vec::new();
        assert!(cluster_embeddings(&[], &embeddings, 0.25, 2).unwrap().is_empty());
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let embeddings = vec![vec![1.0_f32, 0.0]];
        assert_eq!(
            cluster_embeddings(&ids(2), &embeddings, 0.25, 2),
            Err(CoreError::LengthMismatch { ids: 2, embeddings: 1 })
        );
        let ragged = vec![vec![1.0_f32, 0.0], vec![1.0]];
        assert_eq!(
            dbscan_labels(&ragged, 0.25, 2),
            Err(CoreError::DimensionMismatch { index: 1, expected: 2, actual: 1 })
        );
    }

    #[test]
    fn rejects_invalid_parameters() {
        let embeddings = vec![vec![1.0_f32]];
        assert!(matches!(dbscan_labels(&embeddings, 0.0, 2), Err(CoreError::InvalidParameter(_))));
        assert!(matches!(
            dbscan_labels(&embeddings, f64::NAN, 2),
            Err(CoreError::InvalidParameter(_))
        ));
        assert!(matches!(dbscan_labels(&embeddings, 0.25, 0), Err(CoreError::InvalidParameter(_))));
    }
}
