//! Tile fetch executor
//!
//! One [`DownloadExecutor`] owns the shared HTTP client and works through a
//! coordinate list with a bounded pool of in-flight fetches. Results are
//! consumed by a single aggregation loop, so the counters never need
//! cross-task synchronization.

use crate::downloader::config::{
    DEFAULT_CONCURRENCY, REFERER, REQUEST_TIMEOUT, USER_AGENT,
};
use crate::downloader::job::{DownloadResult, RunSummary, TileOutcome};
use crate::downloader::progress::{format_bytes, ProgressState};
use crate::downloader::DownloadError;
use crate::mercator::TileCoordinate;
use crate::output::{tile_dir, tile_path, total_tile_bytes};
use crate::registry::TileSource;
use futures::stream::{self, StreamExt};
use indicatif::ProgressBar;
use reqwest::header::{HeaderMap, HeaderValue, REFERER as REFERER_HEADER, USER_AGENT as UA_HEADER};
use reqwest::{Client, StatusCode};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Download executor orchestrating the fetch-and-write loop
pub struct DownloadExecutor {
    client: Client,
    source: TileSource,
    output_dir: PathBuf,
    concurrency: usize,
}

impl DownloadExecutor {
    /// Create an executor for one source and output directory.
    ///
    /// The HTTP client carries the fixed identifying header set and the
    /// per-request timeout; it is shared by all workers.
    pub fn new(source: TileSource, output_dir: PathBuf) -> Result<Self, DownloadError> {
        let mut headers = HeaderMap::new();
        headers.insert(UA_HEADER, HeaderValue::from_static(USER_AGENT));
        headers.insert(REFERER_HEADER, HeaderValue::from_static(REFERER));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DownloadError::Client(e.to_string()))?;

        Ok(Self {
            client,
            source,
            output_dir,
            concurrency: DEFAULT_CONCURRENCY,
        })
    }

    /// Set the worker pool width (at least 1)
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Fetch a single tile.
    ///
    /// Ensures the `{zoom}/{x}/` directory exists, skips the fetch entirely
    /// when `{y}.png` is already present, and otherwise issues one GET with
    /// no retry. Non-200 statuses and transport errors become `Failed`
    /// results; only filesystem problems are returned as errors.
    pub async fn fetch_tile(
        &self,
        coordinate: TileCoordinate,
    ) -> Result<DownloadResult, DownloadError> {
        let dir = tile_dir(&self.output_dir, &coordinate);
        std::fs::create_dir_all(&dir)
            .map_err(|e| DownloadError::Io(format!("create {}: {e}", dir.display())))?;

        let path = tile_path(&self.output_dir, &coordinate);
        if path.exists() {
            debug!(tile = %coordinate, "Tile cached, skipping");
            return Ok(DownloadResult {
                coordinate,
                outcome: TileOutcome::Skipped,
                detail: "already on disk".to_string(),
            });
        }

        let url = self.source.url_for(&coordinate);
        debug!(tile = %coordinate, url = %url, "Fetching tile");

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return Ok(DownloadResult::failed(coordinate, format!("request error: {e}"))),
        };

        if response.status() != StatusCode::OK {
            return Ok(DownloadResult::failed(
                coordinate,
                format!("HTTP {}", response.status()),
            ));
        }

        let bytes = match response.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => return Ok(DownloadResult::failed(coordinate, format!("body error: {e}"))),
        };

        std::fs::write(&path, &bytes)
            .map_err(|e| DownloadError::Io(format!("write {}: {e}", path.display())))?;

        Ok(DownloadResult {
            coordinate,
            outcome: TileOutcome::Downloaded,
            detail: format!("{} bytes", bytes.len()),
        })
    }

    /// Fetch every enumerated tile and aggregate the outcomes.
    ///
    /// Dispatches up to `concurrency` fetches at a time and consumes
    /// completions in whatever order they finish. Per-tile failures are
    /// logged and counted; the run always covers the full list. After the
    /// last completion the total on-disk size of the tile tree (including
    /// tiles from prior runs) is reported.
    pub async fn run_all(
        &self,
        tiles: Vec<TileCoordinate>,
        progress_bar: Option<ProgressBar>,
    ) -> Result<RunSummary, DownloadError> {
        let total = tiles.len() as u64;
        info!(
            total_tiles = total,
            source = self.source.name(),
            concurrency = self.concurrency,
            output_dir = %self.output_dir.display(),
            "Starting tile run"
        );

        let progress = ProgressState::new(total);
        let mut summary = RunSummary::default();

        let mut results = stream::iter(tiles)
            .map(|coordinate| self.fetch_tile(coordinate))
            .buffer_unordered(self.concurrency);

        while let Some(result) = results.next().await {
            let result = result?;

            if result.outcome == TileOutcome::Failed {
                warn!(tile = %result.coordinate, "Tile failed: {}", result.detail);
            }

            summary.record(result.outcome);
            if let Some(bar) = &progress_bar {
                bar.inc(1);
            }
            if progress.should_emit_update(summary.total()) {
                info!("{}", progress.format_progress(&summary));
            }
        }

        let total_bytes = total_tile_bytes(&self.output_dir);
        info!(
            downloaded = summary.downloaded,
            skipped = summary.skipped,
            failed = summary.failed,
            "Tile run complete, {} on disk",
            format_bytes(total_bytes)
        );

        Ok(summary)
    }
}
