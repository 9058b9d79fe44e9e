use crate::classify::router::Destination;
use crate::engine::BatchPlan;
use crate::error::Error;
use std::fs;
use std::path::Path;
use tracing::debug;

const CATEGORIES: [Destination; 3] = [
    Destination::Deposition,
    Destination::Scanning,
    Destination::Unknown,
];

/// Materialize a plan onto disk: create the three category folders under
/// `output` and copy every assignment from `input`. Best effort — a failed
/// copy aborts the batch without rolling back earlier copies, and the error
/// names the group that was in progress.
pub fn execute(plan: &BatchPlan, input: &Path, output: &Path) -> Result<usize, Error> {
    for category in CATEGORIES {
        fs::create_dir_all(output.join(category.dir_name()))?;
    }

    let mut copied = 0;
    for decision in &plan.decisions {
        for assignment in &decision.assignments {
            let src = input.join(&assignment.source);
            let dst = output
                .join(assignment.destination.dir_name())
                .join(&assignment.new_name);
            fs::copy(&src, &dst).map_err(|source| Error::Copy {
                group: decision.group,
                source,
            })?;
            debug!(
                "{} -> {}/{}",
                assignment.source,
                assignment.destination,
                assignment.new_name,
            );
            copied += 1;
        }
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::plan;
    use tempfile::tempdir;

    #[test]
    fn copies_assignments_into_category_folders() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        fs::write(input.path().join("7-Layer Shot_1-trigger_count.jpg"), b"low").unwrap();
        fs::write(input.path().join("7-Layer Shot_2-trigger_count.jpg"), b"high").unwrap();

        let batch = plan(&[
            "7-Layer Shot_1-trigger_count.jpg".to_string(),
            "7-Layer Shot_2-trigger_count.jpg".to_string(),
        ])
        .unwrap();

        let copied = execute(&batch, input.path(), output.path()).unwrap();
        assert_eq!(copied, 2);
        assert_eq!(
            fs::read(output.path().join("Deposition/7.jpg")).unwrap(),
            b"low"
        );
        assert_eq!(
            fs::read(output.path().join("Scanning/7.jpg")).unwrap(),
            b"high"
        );
        assert!(output.path().join("Unknown").is_dir());
    }

    #[test]
    fn missing_source_reports_the_group_in_progress() {
        let input = tempdir().unwrap();
        let output = tempdir().unwrap();
        // Plan references a file that was never written.
        let batch = plan(&["3-Layer Shot_1-trigger_count.jpg".to_string()]).unwrap();

        match execute(&batch, input.path(), output.path()) {
            Err(err @ Error::Copy { group, .. }) => {
                assert_eq!(group, 3);
                assert!(err
                    .to_string()
                    .starts_with("copy failed while processing group 3:"));
            }
            other => panic!("expected copy error, got {:?}", other),
        }
    }
}
