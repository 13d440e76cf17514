//! Slippy-map tile tree layout
//!
//! Tiles live at `{base}/{zoom}/{x}/{y}.png`; the same layout most map
//! clients consume directly. Helpers here are the single place the layout
//! is spelled out.

use crate::mercator::TileCoordinate;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory holding one tile's column: `{base}/{zoom}/{x}`
pub fn tile_dir(base: &Path, coord: &TileCoordinate) -> PathBuf {
    base.join(coord.zoom.to_string()).join(coord.x.to_string())
}

/// Full path of one tile file: `{base}/{zoom}/{x}/{y}.png`
pub fn tile_path(base: &Path, coord: &TileCoordinate) -> PathBuf {
    tile_dir(base, coord).join(format!("{}.png", coord.y))
}

/// Total size in bytes of every tile under `base`, including tiles written
/// by prior runs.
pub fn total_tile_bytes(base: &Path) -> u64 {
    WalkDir::new(base)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.path().extension().is_some_and(|ext| ext == "png")
        })
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}
