use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "reuse-checkr",
    about = "Resolve REUSE license and copyright information for every file in a tree",
    version
)]
pub struct Cli {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.reuse-checkr/config.toml, fallback ~/.config/reuse-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Number of files resolved concurrently (overrides the config file)
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<usize>,

    /// Show every file's result, and debug logs unless RUST_LOG is set
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
