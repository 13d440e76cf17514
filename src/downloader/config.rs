//! Download tuning constants

use std::time::Duration;

/// Per-request timeout.
/// A tile fetch is a single attempt; anything slower than 30 seconds is
/// counted as failed rather than waited out.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Default worker pool width.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Maximum allowed worker pool width.
/// Public tile servers throttle aggressive clients; 32 parallel requests is
/// already well past the point of diminishing returns for 256px tiles.
pub const MAX_CONCURRENCY: usize = 32;

/// Emit a progress line every this many completions (plus the final one).
pub const PROGRESS_INTERVAL: u64 = 100;

/// User-Agent sent with every tile request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Referer sent with every tile request.
pub const REFERER: &str = "https://www.arcgis.com/";
