//! Fine grouping of a coarse cluster by keyword overlap.

use crate::{jaccard_percent, EMPTY_KEYWORDS_SENTINEL};

/// Partitions `token_lists` into groups of indices by Jaccard overlap.
///
/// Greedy and seed-only: the first unassigned index opens a group, and each
/// later unassigned index joins it when its overlap with the *seed* reaches
/// `threshold` (percent). Members are never compared with each other, so the
/// result is not a transitive closure. Empty keyword sets are compared as the
/// single sentinel token, which puts keyword-less ideas together.
///
/// Groups are ordered by seed, members by input position, and every index
/// appears in exactly one group.
#[must_use]
pub fn smart_grouping<S: AsRef<str>>(token_lists: &[Vec<S>], threshold: f64) -> Vec<Vec<usize>> {
    let tokens: Vec<Vec<&str>> = token_lists
        .iter()
        .map(|list| {
            if list.is_empty() {
                vec![EMPTY_KEYWORDS_SENTINEL]
            } else {
                list.iter().map(AsRef::as_ref).collect()
            }
        })
        .collect();

    let mut used = vec![false; tokens.len()];
    let mut groups = Vec::new();
    for seed in 0..tokens.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let mut group = vec![seed];
        for candidate in (seed + 1)..tokens.len() {
            if used[candidate] {
                continue;
            }
            if jaccard_percent(&tokens[seed], &tokens[candidate]) >= threshold {
                used[candidate] = true;
                group.push(candidate);
            }
        }
        groups.push(group);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists(items: &[&[&str]]) -> Vec<Vec<String>> {
        items.iter().map(|l| l.iter().map(|s| (*s).to_owned()).collect()).collect()
    }

    fn assert_partition(groups: &[Vec<usize>], n: usize) {
        let mut seen = vec![0_usize; n];
        for group in groups {
            for &i in group {
                seen[i] += 1;
            }
        }
        assert!(seen.iter().all(|&c| c == 1), "not a partition: {groups:?}");
    }

    #[test]
    fn identical_sets_share_a_group() {
        let input = lists(&[&["П-1", "ГТС"], &["П-1", "ГТС"], &["ДКС-2"]]);
        let groups = smart_grouping(&input, 20.0);
        assert_eq!(groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn grouping_is_seed_only_not_transitive() {
        // 0~1 = 50%, 1~2 = 50%, 0~2 = 0%
        let input = lists(&[&["A1", "B2"], &["B2", "C3"], &["C3", "D4"]]);
        let groups = smart_grouping(&input, 30.0);
        assert_eq!(groups, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn empty_sets_fall_together_via_sentinel() {
        let input = lists(&[&[], &["П-1"], &[]]);
        let groups = smart_grouping(&input, 20.0);
        assert_eq!(groups, vec![vec![0, 2], vec![1]]);
    }

    #[test]
    fn threshold_is_inclusive() {
        // {A1,B2} vs {A1,C3}: 1/3
        let input = lists(&[&["A1", "B2"], &["A1", "C3"]]);
        let exact = 100.0 / 3.0;
        assert_eq!(smart_grouping(&input, exact), vec![vec![0, 1]]);
        assert_eq!(smart_grouping(&input, exact + 0.01), vec![vec![0], vec![1]]);
    }

    #[test]
    fn zero_threshold_collects_everything_under_first_seed() {
        let input = lists(&[&["A1"], &["B2"], &["C3"]]);
        assert_eq!(smart_grouping(&input, 0.0), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn output_is_partition_and_deterministic() {
        let input = lists(&[
            &["A1", "B2"],
            &["B2"],
            &[],
            &["C3", "A1"],
            &["D4"],
            &["B2", "D4"],
            &[],
        ]);
        let first = smart_grouping(&input, 25.0);
        let second = smart_grouping(&input, 25.0);
        assert_eq!(first, second);
        assert_partition(&first, input.len());
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let input: Vec<Vec<String>> = Vec::new();
        assert!(smart_grouping(&input, 20.0).is_empty());
    }
}
