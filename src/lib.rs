//! # Map Tile Downloader Library
//!
//! Downloads satellite map tiles covering a fixed geographic region at
//! several zoom levels from a public tile server, storing them in a
//! slippy-map directory tree and emitting a coverage index document.
//!
//! ## Features
//!
//! - **Web Mercator addressing**: closed-form projection from geographic
//!   coordinates to standard XYZ tile coordinates
//! - **Multiple tile sources**: embedded registry of named URL templates,
//!   selectable at invocation
//! - **Bounded concurrency**: fixed-width worker pool for parallel fetches
//! - **Skip-if-cached**: tiles already on disk are never re-fetched; a
//!   re-run only downloads what is missing
//! - **Coverage index**: `index.json` describing the configured coverage
//!
//! ## Quick Start
//!
//! ```no_run
//! use map_tile_downloader::downloader::{enumerate_tiles, DownloadExecutor};
//! use map_tile_downloader::region::RegionConfig;
//! use map_tile_downloader::registry::TileSourceRegistry;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let region = RegionConfig::embedded()?.clone();
//! let registry = TileSourceRegistry::load()?;
//! let source = registry.resolve(None)?;
//!
//! let tiles = enumerate_tiles(&region);
//! let executor = DownloadExecutor::new(source.clone(), region.output_dir.clone())?;
//! let summary = executor.run_all(tiles, None).await?;
//! println!("downloaded {} tiles", summary.downloaded);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`mercator`] - Geographic to tile-coordinate projection
//! - [`region`] - Immutable run configuration (center, bounds, zoom levels)
//! - [`registry`] - Registry of tile sources and their URL templates
//! - [`downloader`] - Enumeration and bounded-concurrency fetch pipeline
//! - [`output`] - Tile tree layout and the coverage index document
//! - [`cli`] - Command-line surface

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};

/// CLI command implementations
pub mod cli;

/// Tile fetch pipeline
pub mod downloader;

/// Web Mercator tile addressing
pub mod mercator;

/// Tile tree layout and coverage index
pub mod output;

/// Run configuration for the target region
pub mod region;

/// Tile source registry
pub mod registry;

// Re-export commonly used types
pub use mercator::{TileCoordinate, TileRange};
pub use region::RegionConfig;

/// A geographic point in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub lat: f64,
    /// Longitude in degrees, positive east
    pub lng: f64,
}

/// Rectangular geographic region in latitude/longitude degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Southern edge
    pub min_lat: f64,
    /// Northern edge
    pub max_lat: f64,
    /// Western edge
    pub min_lng: f64,
    /// Eastern edge
    pub max_lng: f64,
}

impl BoundingBox {
    /// Validate bounding box integrity
    ///
    /// Latitudes must stay within the Mercator operating range; the
    /// projection is undefined at the poles.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_lat > self.max_lat {
            return Err(format!(
                "min_lat ({}) must be <= max_lat ({})",
                self.min_lat, self.max_lat
            ));
        }

        if self.min_lng > self.max_lng {
            return Err(format!(
                "min_lng ({}) must be <= max_lng ({})",
                self.min_lng, self.max_lng
            ));
        }

        for lat in [self.min_lat, self.max_lat] {
            if !(-mercator::MAX_LATITUDE..=mercator::MAX_LATITUDE).contains(&lat) {
                return Err(format!(
                    "latitude {} outside Mercator range +/-{}",
                    lat,
                    mercator::MAX_LATITUDE
                ));
            }
        }

        for lng in [self.min_lng, self.max_lng] {
            if !(-180.0..=180.0).contains(&lng) {
                return Err(format!("longitude {lng} outside [-180, 180]"));
            }
        }

        Ok(())
    }
}
