mod cli;
mod logging;

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, FolderArgs};
use colored::*;
use dotenv::dotenv;
use shot_sorter::engine::SortEngine;
use shot_sorter::{config, AppConfig, BatchPlan};
use std::process;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let _guard = logging::init_logger();

    let config = match config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            error!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };

    let args = Cli::parse();

    match args.command {
        Some(Commands::Sort(folders)) => {
            if let Err(err) = run_sort(&config, &folders) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::Package(folders)) => {
            if let Err(err) = run_package(&config, &folders) {
                error!("Error: {}", err);
                process::exit(1);
            }
        }
        Some(Commands::PrintConfig) => {
            println!("Configuration: {:?}", config);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }
}

fn resolve_folders(config: &AppConfig, folders: &FolderArgs) -> Result<AppConfig> {
    let input_folder = folders
        .input
        .clone()
        .or_else(|| Some(config.input_folder.clone()))
        .filter(|path| !path.is_empty());
    let output_folder = folders
        .output
        .clone()
        .or_else(|| Some(config.output_folder.clone()))
        .filter(|path| !path.is_empty());

    match (input_folder, output_folder) {
        (Some(input_folder), Some(output_folder)) => Ok(AppConfig {
            input_folder,
            output_folder,
        }),
        (None, _) => bail!("input folder not set (use --input or Config.toml)"),
        (_, None) => bail!("output folder not set (use --output or Config.toml)"),
    }
}

fn run_sort(config: &AppConfig, folders: &FolderArgs) -> Result<()> {
    let engine = SortEngine::new(resolve_folders(config, folders)?);
    let result = engine.sort()?;

    println!();
    info!(
        "Scan: {}, Classify: {}, Copy: {}",
        format!("{:.2}s", result.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.plan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.copy_duration.as_secs_f64()).green(),
    );
    print_plan_summary(&result.plan);
    info!("Processing log: {}", result.processing_log_path.display());
    if let Some(path) = &result.abnormal_log_path {
        info!("Abnormal groups log: {}", path.display());
    }

    Ok(())
}

fn run_package(config: &AppConfig, folders: &FolderArgs) -> Result<()> {
    let engine = SortEngine::new(resolve_folders(config, folders)?);
    let result = engine.package()?;

    println!();
    info!(
        "Scan: {}, Classify: {}, Package: {}",
        format!("{:.2}s", result.scan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.plan_duration.as_secs_f64()).green(),
        format!("{:.2}s", result.package_duration.as_secs_f64()).green(),
    );
    print_plan_summary(&result.plan);
    info!(
        "Archive: {} ({} bytes)",
        result.archive_path.display(),
        result.archive_bytes,
    );

    Ok(())
}

fn print_plan_summary(plan: &BatchPlan) {
    let summary = &plan.summary;
    info!(
        "{} groups from {} image files — {} -> Deposition, {} -> Scanning, {} -> Unknown",
        format!("{}", summary.groups).cyan(),
        summary.image_files,
        format!("{}", summary.deposition).green(),
        format!("{}", summary.scanning).green(),
        format!("{}", summary.unknown).yellow(),
    );
    if summary.failed_files > 0 {
        info!(
            "{} files did not match the naming rule",
            format!("{}", summary.failed_files).red(),
        );
    }
    if !plan.missing_numbers.is_empty() {
        info!(
            "{} group numbers missing",
            format!("{}", plan.missing_numbers.len()).red(),
        );
    }
    if summary.unhandled_groups > 0 {
        info!(
            "{} groups had no routing rule (5 or more files)",
            format!("{}", summary.unhandled_groups).red(),
        );
    }
}
