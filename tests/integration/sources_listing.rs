//! Sources listing through the CLI binary

use assert_cmd::Command;

#[test]
fn test_sources_list_marks_default() {
    let assert = Command::cargo_bin("map-tile-downloader")
        .unwrap()
        .args(["sources", "list"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(stdout.contains("arcgis (default)"));
    assert!(stdout.contains("google"));
    assert!(stdout.contains("esri"));
}

#[test]
fn test_sources_list_json_format() {
    let assert = Command::cargo_bin("map-tile-downloader")
        .unwrap()
        .args(["sources", "list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = value.as_array().unwrap();
    assert_eq!(entries.len(), 3);

    let arcgis = entries
        .iter()
        .find(|e| e["name"] == "arcgis")
        .expect("arcgis entry");
    assert_eq!(arcgis["default"], true);
    assert!(arcgis["url_template"]
        .as_str()
        .unwrap()
        .contains("{z}"));
}

#[test]
fn test_download_rejects_unknown_source() {
    Command::cargo_bin("map-tile-downloader")
        .unwrap()
        .args(["download", "--source", "bing"])
        .assert()
        .failure();
}
