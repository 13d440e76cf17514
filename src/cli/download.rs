//! Download and index command implementations

use crate::downloader::config::MAX_CONCURRENCY;
use crate::downloader::progress::format_bytes;
use crate::downloader::{enumerate_tiles, DownloadExecutor, RunSummary};
use crate::output::{total_tile_bytes, CoverageIndex};
use crate::region::RegionConfig;
use crate::registry::TileSourceRegistry;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::info;

use super::CliError;

/// Parse and validate the concurrency value
fn parse_concurrency(s: &str) -> Result<usize, String> {
    let value: usize = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if value == 0 {
        return Err("concurrency must be at least 1".to_string());
    }
    if value > MAX_CONCURRENCY {
        return Err(format!(
            "concurrency {value} exceeds maximum of {MAX_CONCURRENCY}"
        ));
    }
    Ok(value)
}

/// Map Tile Downloader CLI
#[derive(Parser, Debug)]
#[command(name = "map-tile-downloader")]
#[command(about = "Download satellite map tiles for a configured region", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Region configuration file (JSON); defaults to the embedded region
    #[arg(long, global = true)]
    pub region: Option<PathBuf>,

    /// Override the output directory for the tile tree and index
    #[arg(long, global = true)]
    pub output_dir: Option<PathBuf>,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download all tiles for the region, then write the coverage index
    Download(DownloadArgs),

    /// Write the coverage index without downloading anything
    Index(IndexArgs),

    /// List available tile sources
    Sources(super::SourcesCommand),
}

/// Download command arguments
#[derive(Parser, Debug)]
pub struct DownloadArgs {
    /// Tile source name from the registry (defaults to the registry default)
    #[arg(long)]
    pub source: Option<String>,

    /// Number of concurrent tile downloads (default: 8, max: 32)
    ///
    /// Each worker holds one request plus one file write in flight. Tiles
    /// are small, so widths past the default mostly trade politeness to the
    /// tile server for little throughput.
    #[arg(long, default_value = "8", value_parser = parse_concurrency)]
    pub concurrency: usize,
}

/// Index command arguments
#[derive(Parser, Debug)]
pub struct IndexArgs {}

/// Resolve the run configuration from CLI flags
fn load_region(cli: &Cli) -> Result<RegionConfig, CliError> {
    let mut region = match &cli.region {
        Some(path) => RegionConfig::from_file(path)?,
        None => RegionConfig::embedded()?.clone(),
    };

    if let Some(dir) = &cli.output_dir {
        region.output_dir = dir.clone();
    }

    Ok(region)
}

/// Print the run summary in human-readable form
fn print_summary(summary: &RunSummary, region: &RegionConfig) {
    println!("\nTile run completed!");
    println!("Output: {}", region.output_dir.display());
    println!("Downloaded: {}", summary.downloaded);
    println!("Skipped: {}", summary.skipped);
    println!("Failed: {}", summary.failed);
    println!(
        "Total size: {}",
        format_bytes(total_tile_bytes(&region.output_dir))
    );
}

impl DownloadArgs {
    /// Execute the download command
    pub async fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let region = load_region(cli)?;
        let registry = TileSourceRegistry::load()?;
        let source = registry.resolve(self.source.as_deref())?.clone();

        let tiles = enumerate_tiles(&region);
        info!(
            total_tiles = tiles.len(),
            source = source.name(),
            "Enumerated region coverage"
        );

        let progress = create_progress_bar(tiles.len() as u64, source.name());
        let executor = DownloadExecutor::new(source, region.output_dir.clone())?
            .with_concurrency(self.concurrency);

        let summary = executor.run_all(tiles, Some(progress.clone())).await?;
        progress.finish_and_clear();

        print_summary(&summary, &region);

        // The original tool always refreshes the index after a run.
        let path = CoverageIndex::from_region(&region).write(&region.output_dir)?;
        println!("Index written: {}", path.display());

        Ok(())
    }
}

impl IndexArgs {
    /// Execute the index-only command
    pub fn execute(&self, cli: &Cli) -> Result<(), CliError> {
        let region = load_region(cli)?;
        let path = CoverageIndex::from_region(&region).write(&region.output_dir)?;
        println!("Index written: {}", path.display());
        Ok(())
    }
}

/// Create the download progress bar
fn create_progress_bar(total_tiles: u64, source: &str) -> ProgressBar {
    let pb = ProgressBar::new(total_tiles);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}")
            .expect("hardcoded template is valid")
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Downloading tiles from {source}"));
    pb
}
