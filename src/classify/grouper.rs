use crate::model::ParsedFileSet;
use std::collections::BTreeMap;

/// Bucket parsed files by group number. Each group's members end up sorted
/// ascending by order number; the sort is stable, so files sharing an order
/// number keep their submission order.
pub fn group_by_number(files: &ParsedFileSet) -> BTreeMap<u64, Vec<(u64, String)>> {
    let mut groups: BTreeMap<u64, Vec<(u64, String)>> = BTreeMap::new();

    for (filename, key) in &files.parsed {
        groups
            .entry(key.group)
            .or_default()
            .push((key.order, filename.clone()));
    }

    for members in groups.values_mut() {
        members.sort_by_key(|(order, _)| *order);
    }

    groups
}
