use std::collections::BTreeMap;

/// Group numbers bucketed by member count. A two-member group is the normal
/// case; every other bucket feeds the abnormal-groups log.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct GroupBuckets {
    pub singles: Vec<u64>,
    pub pairs: Vec<u64>,
    pub triples: Vec<u64>,
    pub quads: Vec<u64>,
    /// Groups with five or more members, with their counts.
    pub other: Vec<(u64, usize)>,
}

impl GroupBuckets {
    pub fn has_abnormal(&self) -> bool {
        !self.singles.is_empty()
            || !self.triples.is_empty()
            || !self.quads.is_empty()
            || !self.other.is_empty()
    }

    /// One line per abnormal bucket, plus one line per oversized group.
    pub fn abnormal_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if !self.singles.is_empty() {
            lines.push(format!("1 file: {}", join(&self.singles)));
        }
        if !self.triples.is_empty() {
            lines.push(format!("3 files: {}", join(&self.triples)));
        }
        if !self.quads.is_empty() {
            lines.push(format!("4 files: {}", join(&self.quads)));
        }
        for (group, count) in &self.other {
            lines.push(format!("{} files: {}", count, group));
        }
        lines
    }
}

fn join(numbers: &[u64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Classify every group by its member count. Input iteration is ascending
/// by group number, so each bucket comes out ascending as well.
pub fn analyze_groups(groups: &BTreeMap<u64, Vec<(u64, String)>>) -> GroupBuckets {
    let mut buckets = GroupBuckets::default();

    for (&group, members) in groups {
        match members.len() {
            1 => buckets.singles.push(group),
            2 => buckets.pairs.push(group),
            3 => buckets.triples.push(group),
            4 => buckets.quads.push(group),
            count => buckets.other.push((group, count)),
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn groups_with_counts(counts: &[(u64, usize)]) -> BTreeMap<u64, Vec<(u64, String)>> {
        counts
            .iter()
            .map(|&(group, count)| {
                let members = (0..count)
                    .map(|i| (i as u64, format!("{}-{}.jpg", group, i)))
                    .collect();
                (group, members)
            })
            .collect()
    }

    #[test]
    fn buckets_by_member_count() {
        let groups = groups_with_counts(&[(1, 2), (2, 1), (3, 3), (4, 4), (5, 6), (6, 2)]);
        let buckets = analyze_groups(&groups);

        assert_eq!(buckets.singles, vec![2]);
        assert_eq!(buckets.pairs, vec![1, 6]);
        assert_eq!(buckets.triples, vec![3]);
        assert_eq!(buckets.quads, vec![4]);
        assert_eq!(buckets.other, vec![(5, 6)]);
        assert!(buckets.has_abnormal());
    }

    #[test]
    fn pairs_only_is_not_abnormal() {
        let groups = groups_with_counts(&[(1, 2), (2, 2)]);
        let buckets = analyze_groups(&groups);
        assert!(!buckets.has_abnormal());
        assert!(buckets.abnormal_lines().is_empty());
    }

    #[test]
    fn abnormal_lines_enumerate_each_bucket() {
        let groups = groups_with_counts(&[(3, 1), (7, 1), (8, 3), (9, 5)]);
        let buckets = analyze_groups(&groups);
        assert_eq!(
            buckets.abnormal_lines(),
            vec![
                "1 file: 3, 7".to_string(),
                "3 files: 8".to_string(),
                "5 files: 9".to_string(),
            ]
        );
    }
}
