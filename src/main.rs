//! `reuse-checkr` — resolve REUSE license and copyright data for a source tree.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]) and set up `tracing`.
//! 2. Load scan config (`config::load_config`).
//! 3. Enumerate candidate files (`lister::list_files`).
//! 4. Build the DEP5 override model once (`scan::load_dep5`).
//! 5. Resolve each file: inline tags, `.license` sidecar, DEP5 (`reuse::resolver`),
//!    in bounded concurrent batches (`scan::resolve_all`).
//! 6. Combine all results into one deduplicated summary (`reuse::combiner`).
//! 7. Render the requested report ([`report`]).

mod cli;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

use reuse_checkr::config::load_config;
use reuse_checkr::lister::list_files;
use reuse_checkr::models::ScanReport;
use reuse_checkr::reuse::combiner::combine;
use reuse_checkr::scan;

use cli::{Cli, ReportFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Resolve project path
    let root = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    let config = load_config(&root, cli.config.as_deref())?;
    let jobs = cli.jobs.unwrap_or(config.scan.jobs).max(1);

    let files = list_files(&root, &config.scan)?;
    let dep5 = scan::load_dep5(&root).await?;

    if !cli.quiet {
        eprintln!(
            "  {} {} files, {} dep5 entries",
            "→".cyan(),
            files.len(),
            dep5.entries().len()
        );
    }

    let pb = if !cli.quiet {
        let pb = ProgressBar::new(files.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let results = scan::resolve_all(&root, &dep5, &files, jobs, pb.as_ref()).await?;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let combined = combine(&root, &results);
    let scan_report = ScanReport {
        root,
        files_scanned: files.len(),
        files: results,
        combined,
    };

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(&scan_report, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scan_report)?);
        }
    }

    Ok(())
}
