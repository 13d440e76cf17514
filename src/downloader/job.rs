//! Tile enumeration and per-tile result types

use crate::mercator::{tile_range, TileCoordinate};
use crate::region::RegionConfig;

/// Outcome of one tile fetch attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileOutcome {
    /// Fetched over the network and written to disk
    Downloaded,
    /// File already present; no network call made
    Skipped,
    /// Non-200 status or transport error; nothing written
    Failed,
}

/// Result of a single tile fetch attempt
#[derive(Debug, Clone)]
pub struct DownloadResult {
    /// The tile this result is for
    pub coordinate: TileCoordinate,
    /// What happened
    pub outcome: TileOutcome,
    /// Human-readable detail (byte count, cache note, or failure text)
    pub detail: String,
}

impl DownloadResult {
    /// Shorthand for a failed result
    pub fn failed(coordinate: TileCoordinate, detail: impl Into<String>) -> Self {
        Self {
            coordinate,
            outcome: TileOutcome::Failed,
            detail: detail.into(),
        }
    }
}

/// Aggregate counters for one run
///
/// Invariant: `downloaded + skipped + failed` equals the number of results
/// recorded, which at the end of a run is the full enumerated tile count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Tiles fetched and written this run
    pub downloaded: u64,
    /// Tiles already on disk
    pub skipped: u64,
    /// Tiles that returned a non-200 status or a transport error
    pub failed: u64,
}

impl RunSummary {
    /// Record one completed result
    pub fn record(&mut self, outcome: TileOutcome) {
        match outcome {
            TileOutcome::Downloaded => self.downloaded += 1,
            TileOutcome::Skipped => self.skipped += 1,
            TileOutcome::Failed => self.failed += 1,
        }
    }

    /// Total results recorded so far
    pub fn total(&self) -> u64 {
        self.downloaded + self.skipped + self.failed
    }
}

/// Materialize every tile coordinate for the region.
///
/// Zoom-major, x-major, y-minor order; the full count is known before any
/// network activity.
pub fn enumerate_tiles(region: &RegionConfig) -> Vec<TileCoordinate> {
    let mut tiles = Vec::new();
    for &zoom in &region.zoom_levels {
        let range = tile_range(&region.bounds, zoom);
        tiles.extend(range.coordinates());
    }
    tiles
}
