use crate::classify::buckets::{self, GroupBuckets};
use crate::classify::router::{self, Destination, RoutingDecision};
use crate::classify::{gaps, grouper, parser};
use crate::config::AppConfig;
use crate::error::Error;
use crate::model::ParsedFileSet;
use crate::output::{archive, copier, logs};
use crate::scanner;
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Derived counts for one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub image_files: usize,
    pub parsed_files: usize,
    pub failed_files: usize,
    pub groups: usize,
    pub deposition: usize,
    pub scanning: usize,
    pub unknown: usize,
    pub unhandled_groups: usize,
}

/// Everything the classification core decided for one batch, before any
/// file is copied. Built once per run and discarded afterwards.
#[derive(Debug)]
pub struct BatchPlan {
    pub files: ParsedFileSet,
    pub missing_numbers: Vec<u64>,
    pub buckets: GroupBuckets,
    /// One decision per group, ascending by group number.
    pub decisions: Vec<RoutingDecision>,
    pub summary: BatchSummary,
}

impl BatchPlan {
    pub fn processing_log(&self) -> Vec<String> {
        self.decisions
            .iter()
            .map(|decision| decision.log_line.clone())
            .collect()
    }

    pub fn abnormal_log(&self) -> Vec<String> {
        self.buckets.abnormal_lines()
    }
}

/// Classify a batch of candidate filenames: filter to image extensions,
/// drop repeated names, parse, group, detect gaps, bucket by count, and
/// route every group.
/// Pure with respect to the filesystem. Abnormal and unhandled group sizes
/// are reported, never raised; only an empty batch is an error.
pub fn plan(candidates: &[String]) -> Result<BatchPlan, Error> {
    let mut files = ParsedFileSet::default();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut image_files = 0usize;
    for name in candidates {
        if !parser::is_image_file(name) {
            continue;
        }
        // A filename carries no identity beyond its text, so a repeated
        // candidate is the same file; keep the first occurrence.
        if !seen.insert(name) {
            continue;
        }
        image_files += 1;
        match parser::parse_filename(name) {
            Some(key) => files.parsed.push((name.clone(), key)),
            None => files.failed.push(name.clone()),
        }
    }
    if image_files == 0 {
        return Err(Error::NoImageFiles);
    }
    if files.parsed.is_empty() {
        return Err(Error::NoMatchingFiles);
    }

    let missing_numbers = gaps::find_missing_numbers(&files.group_numbers());
    let groups = grouper::group_by_number(&files);
    let group_buckets = buckets::analyze_groups(&groups);

    let mut summary = BatchSummary {
        image_files,
        parsed_files: files.parsed.len(),
        failed_files: files.failed.len(),
        groups: groups.len(),
        ..Default::default()
    };

    let mut decisions = Vec::with_capacity(groups.len());
    for (&group, members) in &groups {
        let decision = router::route_group(group, members);
        if decision.is_unhandled() {
            summary.unhandled_groups += 1;
        }
        for assignment in &decision.assignments {
            match assignment.destination {
                Destination::Deposition => summary.deposition += 1,
                Destination::Scanning => summary.scanning += 1,
                Destination::Unknown => summary.unknown += 1,
            }
        }
        decisions.push(decision);
    }

    Ok(BatchPlan {
        files,
        missing_numbers,
        buckets: group_buckets,
        decisions,
        summary,
    })
}

pub struct SortEngine {
    config: AppConfig,
}

#[derive(Debug)]
pub struct SortResult {
    pub scan_duration: Duration,
    pub plan_duration: Duration,
    pub copy_duration: Duration,
    pub plan: BatchPlan,
    pub processing_log_path: PathBuf,
    pub abnormal_log_path: Option<PathBuf>,
}

#[derive(Debug)]
pub struct PackageResult {
    pub scan_duration: Duration,
    pub plan_duration: Duration,
    pub package_duration: Duration,
    pub plan: BatchPlan,
    pub archive_path: PathBuf,
    pub archive_bytes: usize,
}

impl SortEngine {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the full sort pipeline against real folders:
    /// 1. List image files in the input folder
    /// 2. Plan the batch (parse, group, gap-detect, bucket, route)
    /// 3. Copy routed files into the category folders
    /// 4. Persist the processing / abnormal-groups logs
    pub fn sort(&self) -> Result<SortResult, Error> {
        let input = Path::new(&self.config.input_folder);
        let output = Path::new(&self.config.output_folder);

        let (plan, scan_duration, plan_duration) = self.scan_and_plan(input)?;

        info!("Copying routed files...");
        let copy_start = Instant::now();
        let copied = copier::execute(&plan, input, output)?;
        let copy_duration = copy_start.elapsed();
        debug!(
            "Copy completed in {:.2}s — {} files written",
            copy_duration.as_secs_f64(),
            copied,
        );

        let processing_log_path =
            logs::save_log(&plan.processing_log(), output, "processing_log")?;
        let abnormal = plan.abnormal_log();
        let abnormal_log_path = if abnormal.is_empty() {
            None
        } else {
            Some(logs::save_log(&abnormal, output, "abnormal_groups_log")?)
        };

        Ok(SortResult {
            scan_duration,
            plan_duration,
            copy_duration,
            plan,
            processing_log_path,
            abnormal_log_path,
        })
    }

    /// Like [`sort`](Self::sort), but the routed copies and logs are staged
    /// in a temporary folder and packaged into a single ZIP archive written
    /// to the output folder.
    pub fn package(&self) -> Result<PackageResult, Error> {
        let input = Path::new(&self.config.input_folder);
        let output = Path::new(&self.config.output_folder);

        let (plan, scan_duration, plan_duration) = self.scan_and_plan(input)?;

        info!("Packaging routed files...");
        let package_start = Instant::now();
        let staging = tempfile::tempdir()?;
        copier::execute(&plan, input, staging.path())?;
        logs::save_log(&plan.processing_log(), staging.path(), "processing_log")?;
        let abnormal = plan.abnormal_log();
        if !abnormal.is_empty() {
            logs::save_log(&abnormal, staging.path(), "abnormal_groups_log")?;
        }

        let bytes = archive::zip_dir(staging.path())?;
        fs::create_dir_all(output)?;
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let archive_path = output.join(format!("sorted_images_{}.zip", timestamp));
        fs::write(&archive_path, &bytes)?;
        let package_duration = package_start.elapsed();
        debug!(
            "Packaging completed in {:.2}s — {} bytes",
            package_duration.as_secs_f64(),
            bytes.len(),
        );

        Ok(PackageResult {
            scan_duration,
            plan_duration,
            package_duration,
            plan,
            archive_path,
            archive_bytes: bytes.len(),
        })
    }

    fn scan_and_plan(&self, input: &Path) -> Result<(BatchPlan, Duration, Duration), Error> {
        info!("Scanning image files in {}...", input.display());
        let scan_start = Instant::now();
        let filenames = scanner::list_image_files(input)?;
        let scan_duration = scan_start.elapsed();
        debug!(
            "Scan completed in {:.2}s — {} image files",
            scan_duration.as_secs_f64(),
            filenames.len(),
        );

        info!("Classifying {} image files...", filenames.len());
        let plan_start = Instant::now();
        let plan = plan(&filenames)?;
        let plan_duration = plan_start.elapsed();
        debug!(
            "Classification completed in {:.2}s — {} groups",
            plan_duration.as_secs_f64(),
            plan.summary.groups,
        );

        if !plan.files.failed.is_empty() {
            warn!(
                "{} files did not match the naming rule: {:?}",
                plan.files.failed.len(),
                plan.files.failed,
            );
        }
        if !plan.missing_numbers.is_empty() {
            warn!(
                "{} group numbers missing from [1, max]: {:?}",
                plan.missing_numbers.len(),
                plan.missing_numbers,
            );
        }
        if plan.buckets.has_abnormal() {
            warn!("Groups with a member count other than 2 were found");
        }

        Ok((plan, scan_duration, plan_duration))
    }
}
