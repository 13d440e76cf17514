//! Per-tile fetch semantics against a local HTTP listener
//!
//! A minimal canned-response server stands in for the tile host, so these
//! tests exercise the real request path without touching the network.

use map_tile_downloader::downloader::{DownloadExecutor, TileOutcome};
use map_tile_downloader::mercator::TileCoordinate;
use map_tile_downloader::registry::TileSource;
use std::net::SocketAddr;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const NOT_FOUND: &[u8] = b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n";
const OK_TILE: &[u8] =
    b"HTTP/1.1 200 OK\r\ncontent-type: image/png\r\ncontent-length: 8\r\nconnection: close\r\n\r\nPNGBYTES";

/// Accept connections and answer every request with a canned response.
async fn spawn_server(response: &'static [u8]) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            tokio::spawn(async move {
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket.write_all(response).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn local_source(addr: SocketAddr) -> TileSource {
    TileSource::new(
        "local",
        "canned-response listener",
        format!("http://{addr}/{{z}}/{{x}}/{{y}}.png"),
    )
}

#[tokio::test]
async fn test_404_is_failed_and_writes_nothing() {
    let addr = spawn_server(NOT_FOUND).await;
    let tmp = TempDir::new().unwrap();
    let executor = DownloadExecutor::new(local_source(addr), tmp.path().to_path_buf()).unwrap();

    let coordinate = TileCoordinate {
        zoom: 14,
        x: 14186,
        y: 5776,
    };
    let result = executor.fetch_tile(coordinate).await.unwrap();

    assert_eq!(result.outcome, TileOutcome::Failed);
    assert!(result.detail.contains("404"));
    assert!(!tmp.path().join("14/14186/5776.png").exists());

    // A failed fetch never counts as downloaded.
    let summary = executor.run_all(vec![coordinate], None).await.unwrap();
    assert_eq!(summary.downloaded, 0);
    assert_eq!(summary.failed, 1);
}

#[tokio::test]
async fn test_200_writes_body_to_tile_path() {
    let addr = spawn_server(OK_TILE).await;
    let tmp = TempDir::new().unwrap();
    let executor = DownloadExecutor::new(local_source(addr), tmp.path().to_path_buf()).unwrap();

    let coordinate = TileCoordinate {
        zoom: 3,
        x: 6,
        y: 2,
    };
    let result = executor.fetch_tile(coordinate).await.unwrap();

    assert_eq!(result.outcome, TileOutcome::Downloaded);
    assert_eq!(
        std::fs::read(tmp.path().join("3/6/2.png")).unwrap(),
        b"PNGBYTES"
    );
}

#[tokio::test]
async fn test_run_all_counters_sum_to_total() {
    let addr = spawn_server(OK_TILE).await;
    let tmp = TempDir::new().unwrap();
    let executor = DownloadExecutor::new(local_source(addr), tmp.path().to_path_buf())
        .unwrap()
        .with_concurrency(4);

    let tiles: Vec<_> = (0..4u32)
        .flat_map(|x| {
            (0..4u32).map(move |y| TileCoordinate { zoom: 2, x, y })
        })
        .collect();

    // Seed one tile so the run sees a mix of outcomes.
    std::fs::create_dir_all(tmp.path().join("2/0")).unwrap();
    std::fs::write(tmp.path().join("2/0/0.png"), b"seeded").unwrap();

    let summary = executor.run_all(tiles.clone(), None).await.unwrap();
    assert_eq!(
        summary.downloaded + summary.skipped + summary.failed,
        tiles.len() as u64
    );
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.downloaded, 15);

    // Second run over the same list: everything is cached now.
    let rerun = executor.run_all(tiles.clone(), None).await.unwrap();
    assert_eq!(rerun.skipped, tiles.len() as u64);
    assert_eq!(rerun.downloaded, 0);
    assert_eq!(rerun.failed, 0);
}
