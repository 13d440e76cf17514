//! Coverage index document (`index.json`)
//!
//! The index is a pure derivation from the region configuration: it
//! describes the coverage the configuration asks for, not which tiles were
//! actually fetched. Map clients read it to learn the center, bounds, zoom
//! span and per-zoom tile rectangles of the tree.

use super::{OutputError, OutputResult};
use crate::mercator::tile_range;
use crate::region::RegionConfig;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Pixel side length of every tile
pub const TILE_SIZE: u32 = 256;

/// Tile coverage of one zoom level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZoomCoverage {
    /// Column span `[min, max]`
    pub x: [u32; 2],
    /// Row span `[min, max]`
    pub y: [u32; 2],
    /// Number of tiles in the rectangle
    pub count: u64,
}

/// The `index.json` document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageIndex {
    /// Region center as `[lng, lat]`
    pub center: [f64; 2],
    /// Region bounds as `[[minLng, minLat], [maxLng, maxLat]]`
    pub bounds: [[f64; 2]; 2],
    /// Lowest covered zoom level
    pub min_zoom: u8,
    /// Highest covered zoom level
    pub max_zoom: u8,
    /// Pixel side length of every tile
    pub tile_size: u32,
    /// Raster format of the tiles
    pub format: String,
    /// Per-zoom tile rectangles, keyed by zoom level
    pub tiles: BTreeMap<String, ZoomCoverage>,
}

impl CoverageIndex {
    /// Derive the index from a region configuration.
    ///
    /// Depends only on the configuration; identical input yields an
    /// identical document regardless of what any download run achieved.
    pub fn from_region(region: &RegionConfig) -> Self {
        let mut tiles = BTreeMap::new();
        for &zoom in &region.zoom_levels {
            let range = tile_range(&region.bounds, zoom);
            tiles.insert(
                zoom.to_string(),
                ZoomCoverage {
                    x: [range.x_min, range.x_max],
                    y: [range.y_min, range.y_max],
                    count: range.count(),
                },
            );
        }

        Self {
            center: [region.center.lng, region.center.lat],
            bounds: [
                [region.bounds.min_lng, region.bounds.min_lat],
                [region.bounds.max_lng, region.bounds.max_lat],
            ],
            min_zoom: region.min_zoom(),
            max_zoom: region.max_zoom(),
            tile_size: TILE_SIZE,
            format: "png".to_string(),
            tiles,
        }
    }

    /// Write the document as pretty-printed JSON to `dir/index.json`.
    ///
    /// Creates `dir` if needed and returns the written path.
    pub fn write(&self, dir: &Path) -> OutputResult<PathBuf> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| OutputError::Serialization(e.to_string()))?;

        std::fs::create_dir_all(dir)
            .map_err(|e| OutputError::Io(format!("create {}: {e}", dir.display())))?;

        let path = dir.join("index.json");
        std::fs::write(&path, json)
            .map_err(|e| OutputError::Io(format!("write {}: {e}", path.display())))?;

        Ok(path)
    }
}
