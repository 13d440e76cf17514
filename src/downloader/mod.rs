//! Tile enumeration and bounded-concurrency fetch pipeline
//!
//! # Overview
//!
//! The downloader turns a region configuration into a finite list of tile
//! coordinates and works through it with a fixed-width worker pool:
//!
//! 1. **Enumeration**: [`job::enumerate_tiles`] materializes every
//!    coordinate across the configured zoom levels
//! 2. **Execution**: [`executor::DownloadExecutor`] fetches each tile,
//!    skipping coordinates whose file already exists on disk
//! 3. **Aggregation**: results are consumed by a single loop that keeps the
//!    downloaded/skipped/failed counters in a [`job::RunSummary`]
//! 4. **Progress**: [`progress::ProgressState`] controls the reporting
//!    cadence (every 100 completions and at the final one)
//!
//! # Error Handling
//!
//! Per-tile HTTP and transport failures are recorded as `Failed` results
//! and never abort the run. Filesystem errors creating directories or
//! writing tile files indicate an unrecoverable environment problem and
//! surface as [`DownloadError`], aborting the batch.

pub mod config;
pub mod executor;
pub mod job;
pub mod progress;

pub use executor::DownloadExecutor;
pub use job::{enumerate_tiles, DownloadResult, RunSummary, TileOutcome};

/// Fatal download pipeline errors
///
/// Per-tile failures are not errors; they are `Failed` results. This enum
/// covers environment problems that make continuing pointless.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// Filesystem error creating directories or writing tile files
    #[error("IO error: {0}")]
    Io(String),

    /// Failed to construct the HTTP client
    #[error("HTTP client error: {0}")]
    Client(String),
}
