//! Tests for cosine and Jaccard similarity helpers.

use crate::{
    cosine_distance, cosine_similarity, dedup_preserving_order, jaccard_percent,
    mean_vector, to_percent,
};

fn kw(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

#[test]
fn identical_vectors_returns_1() {
    let v = vec![1.0_f32, 2.0, 3.0];
    let result = cosine_similarity(&v, &v);
    assert!((result - 1.0).abs() < 1e-9, "expected ≈1.0, got {result}");
    assert!(cosine_distance(&v, &v).abs() < 1e-9);
}

#[test]
fn orthogonal_vectors_returns_0() {
    let result = cosine_similarity(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
    assert!(result.abs() < 1e-9, "expected ≈0.0, got {result}");
}

#[test]
fn opposite_vectors_returns_negative() {
    let result = cosine_similarity(&[1.0, 0.0], &[-1.0, 0.0]);
    assert!((result + 1.0).abs() < 1e-9, "expected ≈-1.0, got {result}");
    assert!((cosine_distance(&[1.0, 0.0], &[-1.0, 0.0]) - 2.0).abs() < 1e-9);
}

#[test]
fn partial_similarity() {
    // cos([1,1,0], [1,0,0]) = 1 / sqrt(2)
    let result = cosine_similarity(&[1.0, 1.0, 0.0], &[1.0, 0.0, 0.0]);
    let expected = 1.0 / 2.0_f64.sqrt();
    assert!((result - expected).abs() < 1e-6, "expected ≈{expected}, got {result}");
}

#[test]
fn degenerate_vectors_return_0() {
    assert!(cosine_similarity(&[], &[]).abs() < f64::EPSILON);
    assert!(cosine_similarity(&[1.0, 2.0], &[1.0, 2.0, 3.0]).abs() < f64::EPSILON);
    assert!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]).abs() < f64::EPSILON);
    assert!(cosine_similarity(&[f32::NAN, 1.0], &[1.0, 1.0]).abs() < f64::EPSILON);
    assert!(cosine_similarity(&[f32::INFINITY, 1.0], &[1.0, 1.0]).abs() < f64::EPSILON);
}

#[test]
fn jaccard_of_identical_nonempty_sets_is_100() {
    let a = kw(&["ГТС", "П-1"]);
    assert!((jaccard_percent(&a, &a) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn jaccard_is_symmetric() {
    let pairs = [
        (kw(&["A1", "B2", "C3"]), kw(&["B2"])),
        (kw(&["ГТС"]), kw(&["ПАОГазпром", "ГТС", "ДКС-2"])),
        (kw(&[]), kw(&["X-1"])),
        (kw(&["A1", "A1"]), kw(&["A1", "B2", "B2"])),
    ];
    for (a, b) in &pairs {
        let ab = jaccard_percent(a, b);
        let ba = jaccard_percent(b, a);
        assert!((ab - ba).abs() < f64::EPSILON, "{a:?} vs {b:?}: {ab} != {ba}");
    }
}

#[test]
fn jaccard_counts_distinct_elements() {
    // {A1} ∩ {A1, B2} = 1, union = 2
    let result = jaccard_percent(&kw(&["A1", "A1"]), &kw(&["A1", "B2", "B2"]));
    assert!((result - 50.0).abs() < f64::EPSILON, "got {result}");
}

#[test]
fn jaccard_of_empty_sets_is_0() {
    let empty: Vec<String> = Vec::new();
    assert!(jaccard_percent(&empty, &empty).abs() < f64::EPSILON);
}

#[test]
fn mean_vector_averages_elementwise() {
    let a = [1.0_f32, 3.0];
    let b = [3.0_f32, 5.0];
    let mean = mean_vector(&[&a, &b]).unwrap();
    assert_eq!(mean, vec![2.0, 4.0]);
}

#[test]
fn mean_vector_rejects_empty_and_ragged_input() {
    assert!(mean_vector(&[]).is_none());
    let a = [1.0_f32];
    let b = [1.0_f32, 2.0];
    assert!(mean_vector(&[&a, &b]).is_none());
}

#[test]
fn dedup_keeps_first_occurrence_order() {
    let result = dedup_preserving_order(kw(&["B", "A", "B", "C", "A"]));
    assert_eq!(result, kw(&["B", "A", "C"]));
}

#[test]
fn to_percent_rounds_to_two_decimals() {
    assert!((to_percent(0.123_456) - 12.35).abs() < 1e-9);
    assert!((to_percent(1.0) - 100.0).abs() < 1e-9);
    assert!((to_percent(-0.5) + 50.0).abs() < 1e-9);
}
