//! Index-only mode through the CLI binary

use assert_cmd::Command;
use tempfile::TempDir;

#[test]
fn test_index_only_writes_valid_index_with_no_tiles() {
    let temp_dir = TempDir::new().unwrap();

    Command::cargo_bin("map-tile-downloader")
        .unwrap()
        .args([
            "index",
            "--output-dir",
            temp_dir.path().to_str().unwrap(),
        ])
        .assert()
        .success();

    let raw = std::fs::read_to_string(temp_dir.path().join("index.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value["minZoom"], 14);
    assert_eq!(value["maxZoom"], 17);
    assert_eq!(value["tileSize"], 256);
    assert_eq!(value["format"], "png");

    let tiles = value["tiles"].as_object().unwrap();
    assert_eq!(tiles.len(), 4);
    for (zoom, coverage) in tiles {
        assert!(
            coverage["count"].as_u64().unwrap() > 0,
            "zoom {zoom} has an empty rectangle"
        );
    }

    // Only the index was written; no tile directories appeared.
    let entries: Vec<_> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .collect();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].file_name(), "index.json");
}

#[test]
fn test_index_uses_supplied_region_file() {
    let temp_dir = TempDir::new().unwrap();
    let region_path = temp_dir.path().join("region.json");
    std::fs::write(
        &region_path,
        r#"{
            "center": { "lat": 51.5, "lng": -0.12 },
            "bounds": { "min_lat": 51.4, "max_lat": 51.6, "min_lng": -0.2, "max_lng": 0.0 },
            "zoom_levels": [10, 11],
            "output_dir": "unused"
        }"#,
    )
    .unwrap();

    let out_dir = temp_dir.path().join("out");
    Command::cargo_bin("map-tile-downloader")
        .unwrap()
        .args([
            "index",
            "--region",
            region_path.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success();

    let raw = std::fs::read_to_string(out_dir.join("index.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["minZoom"], 10);
    assert_eq!(value["maxZoom"], 11);
    assert_eq!(value["center"][0], -0.12);
    assert_eq!(value["center"][1], 51.5);
}

#[test]
fn test_index_rejects_invalid_region_file() {
    let temp_dir = TempDir::new().unwrap();
    let region_path = temp_dir.path().join("region.json");
    std::fs::write(
        &region_path,
        r#"{
            "center": { "lat": 0.0, "lng": 0.0 },
            "bounds": { "min_lat": 5.0, "max_lat": 1.0, "min_lng": 0.0, "max_lng": 1.0 },
            "zoom_levels": [10],
            "output_dir": "unused"
        }"#,
    )
    .unwrap();

    Command::cargo_bin("map-tile-downloader")
        .unwrap()
        .args(["index", "--region", region_path.to_str().unwrap()])
        .assert()
        .failure();
}
