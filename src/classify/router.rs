use crate::classify::parser;
use std::fmt;

/// Output bucket a routed file is copied into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Deposition,
    Scanning,
    Unknown,
}

impl Destination {
    pub fn dir_name(self) -> &'static str {
        match self {
            Destination::Deposition => "Deposition",
            Destination::Scanning => "Scanning",
            Destination::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// One planned copy: `source` goes to `<destination>/<new_name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub source: String,
    pub destination: Destination,
    pub new_name: String,
}

/// What the rule table decided for one group. The router only decides;
/// copying is the output layer's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingDecision {
    pub group: u64,
    pub assignments: Vec<Assignment>,
    /// Members left out by the rule, in ascending order.
    pub unused: Vec<String>,
    pub log_line: String,
}

impl RoutingDecision {
    /// True for groups with no routing rule (five or more members).
    pub fn is_unhandled(&self) -> bool {
        self.assignments.is_empty() && !self.unused.is_empty()
    }
}

/// Apply the count-based rule to one group. `members` must already be
/// sorted ascending by order number.
///
/// | count | Deposition | Scanning | unused      |
/// |-------|------------|----------|-------------|
/// | 1     | — (member goes to Unknown) | — | —  |
/// | 2     | index 0    | index 1  | —           |
/// | 3     | index 1    | index 2  | index 0     |
/// | 4     | index 2    | index 3  | indices 0,1 |
/// | ≥5    | —          | —        | all members |
///
/// Counts 3 and 4 keep only the last two members: extra attempts before the
/// final pair are dropped. Five or more has no safe rule, so nothing is
/// copied and every member is logged.
pub fn route_group(group: u64, members: &[(u64, String)]) -> RoutingDecision {
    // Destination name reuses the first member's extension, case preserved.
    let ext = members
        .first()
        .map(|(_, name)| parser::raw_extension(name))
        .unwrap_or("");
    let new_name = format!("{}{}", group, ext);

    let count = members.len();
    let mut assignments = Vec::new();
    let mut unused: Vec<String> = Vec::new();

    let log_line = match count {
        1 => {
            assignments.push(Assignment {
                source: members[0].1.clone(),
                destination: Destination::Unknown,
                new_name: new_name.clone(),
            });
            format!(
                "[1 file] {}: {} -> Unknown/{}",
                group, members[0].1, new_name
            )
        }
        2 => {
            assignments.push(Assignment {
                source: members[0].1.clone(),
                destination: Destination::Deposition,
                new_name: new_name.clone(),
            });
            assignments.push(Assignment {
                source: members[1].1.clone(),
                destination: Destination::Scanning,
                new_name: new_name.clone(),
            });
            format!(
                "[2 files] {}: {} -> Deposition/{}, {} -> Scanning/{}",
                group, members[0].1, new_name, members[1].1, new_name
            )
        }
        3 | 4 => {
            let deposition = &members[count - 2].1;
            let scanning = &members[count - 1].1;
            unused = members[..count - 2]
                .iter()
                .map(|(_, name)| name.clone())
                .collect();
            assignments.push(Assignment {
                source: deposition.clone(),
                destination: Destination::Deposition,
                new_name: new_name.clone(),
            });
            assignments.push(Assignment {
                source: scanning.clone(),
                destination: Destination::Scanning,
                new_name: new_name.clone(),
            });
            format!(
                "[{} files] {}: {} -> Deposition/{}, {} -> Scanning/{} (unused: {})",
                count,
                group,
                deposition,
                new_name,
                scanning,
                new_name,
                unused.join(", ")
            )
        }
        _ => {
            unused = members.iter().map(|(_, name)| name.clone()).collect();
            format!(
                "[{} files] {}: no routing rule - {}",
                count,
                group,
                unused.join(", ")
            )
        }
    };

    RoutingDecision {
        group,
        assignments,
        unused,
        log_line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(entries: &[(u64, &str)]) -> Vec<(u64, String)> {
        entries
            .iter()
            .map(|&(order, name)| (order, name.to_string()))
            .collect()
    }

    #[test]
    fn pair_routes_low_to_deposition_high_to_scanning() {
        let decision = route_group(7, &members(&[(10, "a.jpg"), (20, "b.jpg")]));
        assert_eq!(
            decision.assignments,
            vec![
                Assignment {
                    source: "a.jpg".to_string(),
                    destination: Destination::Deposition,
                    new_name: "7.jpg".to_string(),
                },
                Assignment {
                    source: "b.jpg".to_string(),
                    destination: Destination::Scanning,
                    new_name: "7.jpg".to_string(),
                },
            ]
        );
        assert!(decision.unused.is_empty());
        assert_eq!(
            decision.log_line,
            "[2 files] 7: a.jpg -> Deposition/7.jpg, b.jpg -> Scanning/7.jpg"
        );
    }

    #[test]
    fn single_member_goes_to_unknown_renamed() {
        let decision = route_group(4, &members(&[(1, "4-Layer Shot_1-trigger_count.png")]));
        assert_eq!(decision.assignments.len(), 1);
        let only = &decision.assignments[0];
        assert_eq!(only.destination, Destination::Unknown);
        assert_eq!(only.new_name, "4.png");
        assert!(!decision.is_unhandled());
    }

    #[test]
    fn triple_keeps_the_last_two() {
        let decision = route_group(2, &members(&[(1, "x.jpg"), (2, "y.jpg"), (3, "z.jpg")]));
        assert_eq!(decision.assignments[0].source, "y.jpg");
        assert_eq!(decision.assignments[0].destination, Destination::Deposition);
        assert_eq!(decision.assignments[1].source, "z.jpg");
        assert_eq!(decision.assignments[1].destination, Destination::Scanning);
        assert_eq!(decision.unused, vec!["x.jpg".to_string()]);
        assert!(decision.log_line.contains("(unused: x.jpg)"));
    }

    #[test]
    fn quad_drops_the_first_two() {
        let decision = route_group(
            8,
            &members(&[(1, "a.jpg"), (2, "b.jpg"), (3, "c.jpg"), (4, "d.jpg")]),
        );
        assert_eq!(decision.assignments[0].source, "c.jpg");
        assert_eq!(decision.assignments[1].source, "d.jpg");
        assert_eq!(
            decision.unused,
            vec!["a.jpg".to_string(), "b.jpg".to_string()]
        );
        assert!(decision.log_line.contains("(unused: a.jpg, b.jpg)"));
    }

    #[test]
    fn five_or_more_is_unhandled() {
        let entries: Vec<(u64, String)> = (1..=6)
            .map(|i| (i, format!("9-Layer Shot_{}-trigger_count.jpg", i)))
            .collect();
        let decision = route_group(9, &entries);

        assert!(decision.assignments.is_empty());
        assert_eq!(decision.unused.len(), 6);
        assert!(decision.is_unhandled());
        assert!(decision.log_line.starts_with("[6 files] 9: no routing rule - "));
        for (_, name) in &entries {
            assert!(decision.log_line.contains(name.as_str()));
        }
    }

    #[test]
    fn destination_name_preserves_extension_case() {
        let decision = route_group(5, &members(&[(1, "a.PNG"), (2, "b.png")]));
        assert_eq!(decision.assignments[0].new_name, "5.PNG");
        assert_eq!(decision.assignments[1].new_name, "5.PNG");
    }
}
