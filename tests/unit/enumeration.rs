use map_tile_downloader::downloader::enumerate_tiles;
use map_tile_downloader::mercator::tile_range;
use map_tile_downloader::region::RegionConfig;
use map_tile_downloader::{BoundingBox, GeoPoint};
use std::collections::HashSet;
use std::path::PathBuf;

fn farm_region() -> RegionConfig {
    RegionConfig {
        center: GeoPoint {
            lat: 46.79,
            lng: 131.72,
        },
        bounds: BoundingBox {
            min_lat: 46.738,
            max_lat: 46.842,
            min_lng: 131.644,
            max_lng: 131.796,
        },
        zoom_levels: vec![14, 15, 16],
        output_dir: PathBuf::from("tiles"),
    }
}

#[test]
fn test_enumeration_count_equals_sum_of_range_products() {
    let region = farm_region();

    let expected: u64 = region
        .zoom_levels
        .iter()
        .map(|&zoom| {
            let range = tile_range(&region.bounds, zoom);
            let cols = (range.x_max - range.x_min + 1) as u64;
            let rows = (range.y_max - range.y_min + 1) as u64;
            cols * rows
        })
        .sum();

    let tiles = enumerate_tiles(&region);
    assert_eq!(tiles.len() as u64, expected);
}

#[test]
fn test_enumeration_unique_within_each_zoom() {
    let region = farm_region();
    let tiles = enumerate_tiles(&region);

    for &zoom in &region.zoom_levels {
        let per_zoom: Vec<_> = tiles.iter().filter(|t| t.zoom == zoom).collect();
        let unique: HashSet<_> = per_zoom.iter().map(|t| (t.x, t.y)).collect();
        assert_eq!(unique.len(), per_zoom.len(), "duplicates at zoom {zoom}");
    }
}

#[test]
fn test_embedded_region_enumeration_is_finite_and_known_up_front() {
    let region = RegionConfig::embedded().unwrap();
    let tiles = enumerate_tiles(region);

    // Four zoom levels over a ~10x15 km region; thousands of tiles at the
    // deepest level, but finite and fully materialized.
    assert!(!tiles.is_empty());
    let deepest = region.max_zoom();
    assert!(tiles.iter().any(|t| t.zoom == deepest));
    assert!(tiles.iter().all(|t| region.zoom_levels.contains(&t.zoom)));
}
