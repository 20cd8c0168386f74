//! Subgroups: the persisted outcome of a clustering run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{smart_grouping, ClusterLabel, NOISE_LABEL};

/// A named group of idea ids inside one coarse duplicate cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgroup {
    pub cluster_id: String,
    /// Member idea ids in corpus order.
    pub members: Vec<String>,
}

impl Subgroup {
    #[must_use]
    pub fn new(cluster_id: impl Into<String>, members: Vec<String>) -> Self {
        Self { cluster_id: cluster_id.into(), members }
    }

    #[must_use]
    pub fn contains(&self, idea_id: &str) -> bool {
        self.members.iter().any(|m| m == idea_id)
    }

    /// Copy without `idea_id`, or `None` if nothing would remain.
    #[must_use]
    pub fn without(&self, idea_id: &str) -> Option<Self> {
        let members: Vec<String> = self.members.iter().filter(|m| *m != idea_id).cloned().collect();
        if members.is_empty() {
            return None;
        }
        Some(Self { cluster_id: self.cluster_id.clone(), members })
    }
}

/// Identifier of the `subgroup`-th subgroup (counted over the whole run)
/// found in the `group`-th duplicate cluster.
#[must_use]
pub fn subgroup_id(group: usize, subgroup: usize) -> String {
    format!("cluster_{group}_{subgroup}")
}

/// Coarse labels split into duplicate clusters and uniques.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateSplit {
    /// Positions of the members of each cluster with at least two members,
    /// clusters in ascending label order, members in input order.
    pub duplicate_groups: Vec<Vec<usize>>,
    /// Positions of noise-labelled ideas.
    pub uniques: Vec<usize>,
}

/// Splits one run's labels into duplicate clusters and uniques.
///
/// A non-noise cluster with a single member is neither.
#[must_use]
pub fn split_duplicates_and_uniques(labels: &[ClusterLabel]) -> DuplicateSplit {
    let mut split = DuplicateSplit::default();
    let mut by_label: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (position, label) in labels.iter().enumerate() {
        if label.label == NOISE_LABEL {
            split.uniques.push(position);
        } else {
            by_label.entry(label.label).or_default().push(position);
        }
    }
    split.duplicate_groups = by_label.into_values().filter(|members| members.len() > 1).collect();
    split
}

/// Summary of one `process_clusters` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusteringReport {
    /// Ideas that took part in clustering.
    pub ideas: usize,
    /// Stored ideas left out for a missing or mis-sized embedding.
    pub skipped: usize,
    pub duplicate_clusters: usize,
    pub uniques: usize,
    pub subgroups: usize,
}

/// Fine-groups every duplicate cluster by keyword overlap and names the subgroups.
///
/// `ids` and `keywords` are parallel to the labels `split` was built from.
#[must_use]
pub fn build_subgroups(
    ids: &[String],
    keywords: &[Vec<String>],
    split: &DuplicateSplit,
    threshold: f64,
) -> Vec<Subgroup> {
    let mut subgroups = Vec::new();
    for (group_num, group) in split.duplicate_groups.iter().enumerate() {
        let token_lists: Vec<Vec<&str>> = group
            .iter()
            .map(|&i| keywords[i].iter().map(String::as_str).collect())
            .collect();
        for members in smart_grouping(&token_lists, threshold) {
            let member_ids = members.iter().map(|&m| ids[group[m]].clone()).collect();
            subgroups.push(Subgroup::new(subgroup_id(group_num, subgroups.len()), member_ids));
        }
    }
    subgroups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[i64]) -> Vec<ClusterLabel> {
        items
            .iter()
            .enumerate()
            .map(|(i, &label)| ClusterLabel { idea_id: format!("id{i}"), label })
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn split_orders_groups_by_label_and_members_by_position() {
        let split = split_duplicates_and_uniques(&labels(&[1, -1, 0, 1, 0, -1]));
        assert_eq!(split.duplicate_groups, vec![vec![2, 4], vec![0, 3]]);
        assert_eq!(split.uniques, vec![1, 5]);
    }

    #[test]
    fn singleton_cluster_is_neither_duplicate_nor_unique() {
        let split = split_duplicates_and_uniques(&labels(&[0, 1, 1]));
        assert_eq!(split.duplicate_groups, vec![vec![1, 2]]);
        assert!(split.uniques.is_empty());
    }

    #[test]
    fn subgroup_ids_count_across_the_run() {
        let ids = strings(&["a", "b", "c", "d", "e"]);
        let keywords = vec![
            strings(&["П-1"]),
            strings(&["ДКС-2"]),
            strings(&["П-1"]),
            strings(&["ГТС"]),
            strings(&["ГТС"]),
        ];
        let split = split_duplicates_and_uniques(&labels(&[0, 0, 0, 1, 1]));
        let subgroups = build_subgroups(&ids, &keywords, &split, 20.0);
        assert_eq!(
            subgroups,
            vec![
                Subgroup::new("cluster_0_0", strings(&["a", "c"])),
                Subgroup::new("cluster_0_1", strings(&["b"])),
                Subgroup::new("cluster_1_2", strings(&["d", "e"])),
            ]
        );
    }

    #[test]
    fn without_rewrites_or_empties() {
        let group = Subgroup::new("cluster_0_0", strings(&["a", "b"]));
        assert_eq!(group.without("a"), Some(Subgroup::new("cluster_0_0", strings(&["b"]))));
        let single = Subgroup::new("cluster_0_1", strings(&["a"]));
        assert_eq!(single.without("a"), None);
        assert!(group.contains("b"));
        assert!(!group.contains("z"));
    }
}
