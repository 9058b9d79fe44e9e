/// The two numeric tokens extracted from a shot filename:
/// `<group>-Layer Shot_<order>-trigger_count.<ext>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    /// Identifies the subject whose images are being classified.
    pub group: u64,
    /// Orders members within a group; not necessarily unique.
    pub order: u64,
}

/// Partition of the image files of one batch into parsed and rejected
/// filenames. Every candidate lands in exactly one of the two lists;
/// `parsed` keeps the caller's submission order.
#[derive(Debug, Default)]
pub struct ParsedFileSet {
    pub parsed: Vec<(String, ParsedKey)>,
    pub failed: Vec<String>,
}

impl ParsedFileSet {
    pub fn group_numbers(&self) -> Vec<u64> {
        self.parsed.iter().map(|(_, key)| key.group).collect()
    }
}
