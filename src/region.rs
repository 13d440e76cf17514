//! Run configuration for the target region
//!
//! A run is parameterized by an immutable [`RegionConfig`] constructed once
//! at process start: the geographic center, the bounding box to cover, the
//! zoom levels to download, and the output directory. A default region is
//! embedded in the binary; a JSON file can supply a different one.

use crate::mercator::MAX_ZOOM;
use crate::{BoundingBox, GeoPoint};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Embedded default region
const REGION_JSON: &str = include_str!("region.json");

/// Embedded region instance (parsed once)
static EMBEDDED: Lazy<Result<RegionConfig, RegionError>> =
    Lazy::new(|| RegionConfig::from_json(REGION_JSON));

/// Immutable configuration for one download run
#[derive(Debug, Clone, Deserialize)]
pub struct RegionConfig {
    /// Geographic center of the region, recorded in the coverage index
    pub center: GeoPoint,
    /// Bounding box to cover
    pub bounds: BoundingBox,
    /// Zoom levels to download
    pub zoom_levels: Vec<u8>,
    /// Root directory of the tile tree
    pub output_dir: PathBuf,
}

impl RegionConfig {
    /// The embedded default region
    ///
    /// This is a singleton operation - the region is parsed once and cached.
    pub fn embedded() -> Result<&'static Self, RegionError> {
        EMBEDDED.as_ref().map_err(Clone::clone)
    }

    /// Load a region from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, RegionError> {
        let raw = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            RegionError::Io(format!("failed to read {}: {e}", path.as_ref().display()))
        })?;
        Self::from_json(&raw)
    }

    /// Parse and validate a region from a JSON string
    fn from_json(json: &str) -> Result<Self, RegionError> {
        let region: RegionConfig = serde_json::from_str(json)
            .map_err(|e| RegionError::Parse(format!("failed to parse region: {e}")))?;
        region.validate()?;
        Ok(region)
    }

    /// Validate configuration integrity
    pub fn validate(&self) -> Result<(), RegionError> {
        self.bounds.validate().map_err(RegionError::Invalid)?;

        if self.zoom_levels.is_empty() {
            return Err(RegionError::Invalid(
                "at least one zoom level is required".to_string(),
            ));
        }

        for &zoom in &self.zoom_levels {
            if zoom > MAX_ZOOM {
                return Err(RegionError::Invalid(format!(
                    "zoom level {zoom} exceeds maximum {MAX_ZOOM}"
                )));
            }
        }

        Ok(())
    }

    /// Lowest configured zoom level
    pub fn min_zoom(&self) -> u8 {
        self.zoom_levels.iter().copied().min().unwrap_or(0)
    }

    /// Highest configured zoom level
    pub fn max_zoom(&self) -> u8 {
        self.zoom_levels.iter().copied().max().unwrap_or(0)
    }
}

/// Errors that can occur when loading a region configuration
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegionError {
    /// Failed to read the configuration file
    #[error("region IO error: {0}")]
    Io(String),

    /// Failed to parse region JSON
    #[error("region parse error: {0}")]
    Parse(String),

    /// Configuration violates an invariant
    #[error("invalid region: {0}")]
    Invalid(String),
}
