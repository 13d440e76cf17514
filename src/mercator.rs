//! Web Mercator slippy-map tile addressing
//!
//! Converts geographic coordinates to integer tile coordinates under the
//! standard XYZ tiling scheme (OpenStreetMap-style): at zoom `z` the world
//! is a `2^z` by `2^z` grid, x growing eastward from longitude -180 and
//! y growing *southward* from the northern Mercator limit.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Northernmost latitude representable in Web Mercator.
///
/// `atan(sinh(pi))` in degrees; beyond this the projection diverges.
pub const MAX_LATITUDE: f64 = 85.0511;

/// Highest zoom level accepted by configuration validation.
///
/// Keeps `2^zoom` and tile indices within `u32`.
pub const MAX_ZOOM: u8 = 22;

/// Address of one raster tile in the z/x/y pyramid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoordinate {
    /// Pyramid level; grid side length is `2^zoom`
    pub zoom: u8,
    /// Column index, `[0, 2^zoom - 1]`, west to east
    pub x: u32,
    /// Row index, `[0, 2^zoom - 1]`, north to south
    pub y: u32,
}

impl std::fmt::Display for TileCoordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}

/// Rectangle of tile coordinates intersecting a bounding box at one zoom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRange {
    /// Pyramid level of the rectangle
    pub zoom: u8,
    /// Westernmost column
    pub x_min: u32,
    /// Easternmost column
    pub x_max: u32,
    /// Northernmost row
    pub y_min: u32,
    /// Southernmost row
    pub y_max: u32,
}

impl TileRange {
    /// Number of tiles in the rectangle
    pub fn count(&self) -> u64 {
        let cols = (self.x_max - self.x_min + 1) as u64;
        let rows = (self.y_max - self.y_min + 1) as u64;
        cols * rows
    }

    /// Iterate every coordinate in the rectangle, x-major, y-minor
    pub fn coordinates(&self) -> impl Iterator<Item = TileCoordinate> + '_ {
        let zoom = self.zoom;
        let (y_min, y_max) = (self.y_min, self.y_max);
        (self.x_min..=self.x_max)
            .flat_map(move |x| (y_min..=y_max).map(move |y| TileCoordinate { zoom, x, y }))
    }
}

/// Project a geographic point onto the tile grid at the given zoom.
///
/// Longitude maps linearly across the full circle; latitude goes through
/// the inverse Mercator transform
/// `y_frac = (1 - ln(tan(lat) + sec(lat)) / pi) / 2`. Both fractions are
/// scaled by `2^zoom` and truncated toward zero. Results are clamped into
/// `[0, 2^zoom - 1]` so the eastern and northern edges of the map land on
/// the last tile instead of one past it.
///
/// Latitudes beyond [`MAX_LATITUDE`] are not meaningful here; configured
/// regions are validated before reaching this point.
pub fn project(lat: f64, lng: f64, zoom: u8) -> TileCoordinate {
    let n = (1u64 << zoom) as f64;

    let x_frac = (lng + 180.0) / 360.0;
    let lat_rad = lat.to_radians();
    let y_frac = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / PI) / 2.0;

    let x = (x_frac * n).clamp(0.0, n - 1.0) as u32;
    let y = (y_frac * n).clamp(0.0, n - 1.0) as u32;

    TileCoordinate { zoom, x, y }
}

/// Tile rectangle covering a bounding box at the given zoom.
///
/// Row indices grow southward, so the northern edge (`max_lat`) yields
/// `y_min` and the southern edge (`min_lat`) yields `y_max`.
pub fn tile_range(bbox: &BoundingBox, zoom: u8) -> TileRange {
    let south_west = project(bbox.min_lat, bbox.min_lng, zoom);
    let north_east = project(bbox.max_lat, bbox.max_lng, zoom);

    TileRange {
        zoom,
        x_min: south_west.x,
        x_max: north_east.x,
        y_min: north_east.y,
        y_max: south_west.y,
    }
}
