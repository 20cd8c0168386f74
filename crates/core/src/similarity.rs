//! Vector and keyword-set similarity helpers.

use std::collections::HashSet;

/// Cosine similarity between two vectors in [-1, 1].
/// Returns 0.0 if the vectors differ in length, are empty, zero, or non-finite.
#[must_use]
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let xd = f64::from(*x);
        let yd = f64::from(*y);
        dot += xd * yd;
        norm_a += xd * xd;
        norm_b += yd * yd;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() || !dot.is_finite() {
        return 0.0;
    }
    (dot / denom).clamp(-1.0, 1.0)
}

/// Cosine distance `1 - cosine_similarity`, in [0, 2].
#[must_use]
pub fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    1.0 - cosine_similarity(a, b)
}

/// Jaccard overlap of two keyword sets as a percentage in [0, 100].
///
/// Duplicates inside either slice are ignored. An empty union yields 0.
#[must_use]
pub fn jaccard_percent<S: AsRef<str>>(a: &[S], b: &[S]) -> f64 {
    let set_a: HashSet<&str> = a.iter().map(AsRef::as_ref).collect();
    let set_b: HashSet<&str> = b.iter().map(AsRef::as_ref).collect();
    let union = set_a.union(&set_b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = set_a.intersection(&set_b).count();
    #[allow(clippy::cast_precision_loss, reason = "set sizes are far below 2^52")]
    let percent = 100.0 * intersection as f64 / union as f64;
    percent
}

/// Element-wise mean of equally sized vectors.
///
/// Returns `None` for an empty input or when lengths disagree.
#[must_use]
pub fn mean_vector(vectors: &[&[f32]]) -> Option<Vec<f32>> {
    let first = vectors.first()?;
    let dim = first.len();
    if vectors.iter().any(|v| v.len() != dim) {
        return None;
    }
    let mut sum = vec![0.0_f64; dim];
    for v in vectors {
        for (acc, x) in sum.iter_mut().zip(v.iter()) {
            *acc += f64::from(*x);
        }
    }
    #[allow(clippy::cast_precision_loss, reason = "cluster sizes are far below 2^52")]
    let n = vectors.len() as f64;
    #[allow(clippy::cast_possible_truncation, reason = "mean of f32 values fits f32")]
    let mean = sum.into_iter().map(|s| (s / n) as f32).collect();
    Some(mean)
}

/// Removes duplicates while preserving first-seen order.
#[must_use]
pub fn dedup_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut result = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            result.push(item);
        }
    }
    result
}

/// Rounds a similarity in [-1, 1] to a percentage with two decimals.
#[must_use]
pub fn to_percent(similarity: f64) -> f64 {
    (similarity * 100.0 * 100.0).round() / 100.0
}
