use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "shot-sorter")]
#[command(about = "Sorts vision shot images into Deposition/Scanning/Unknown", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sort an input folder into category folders under the output folder
    Sort(FolderArgs),
    /// Sort and package the results into a single ZIP archive
    Package(FolderArgs),
    /// Print configuration values
    PrintConfig,
}

#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Input folder containing the shot images (overrides Config.toml)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output folder for routed copies and logs (overrides Config.toml)
    #[arg(short, long)]
    pub output: Option<String>,
}
