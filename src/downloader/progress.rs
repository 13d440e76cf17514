//! Progress reporting for bulk tile runs
//!
//! The executor loop completes tiles in no particular order; this module
//! decides when a progress line is worth emitting (every
//! [`PROGRESS_INTERVAL`] completions and at the final completion) and
//! formats it with the running counters and throughput.

use super::config::PROGRESS_INTERVAL;
use super::job::RunSummary;
use std::time::Instant;

/// Cadence and formatting state for progress reporting
#[derive(Debug, Clone)]
pub struct ProgressState {
    total: u64,
    emit_every: u64,
    start_time: Instant,
}

impl ProgressState {
    /// Create progress state for a run over `total` tiles
    pub fn new(total: u64) -> Self {
        Self {
            total,
            emit_every: PROGRESS_INTERVAL,
            start_time: Instant::now(),
        }
    }

    /// Override the emission interval
    pub fn with_interval(mut self, emit_every: u64) -> Self {
        self.emit_every = emit_every.max(1);
        self
    }

    /// Whether a progress line should be emitted after `completed` results
    pub fn should_emit_update(&self, completed: u64) -> bool {
        if completed == 0 {
            return false;
        }
        completed % self.emit_every == 0 || completed == self.total
    }

    /// Human-readable progress line for logging
    pub fn format_progress(&self, summary: &RunSummary) -> String {
        let completed = summary.total();
        let mut line = format!(
            "progress {completed}/{} (downloaded: {}, skipped: {}, failed: {})",
            self.total, summary.downloaded, summary.skipped, summary.failed
        );

        let elapsed = self.start_time.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            line.push_str(&format!(" at {:.0} tiles/sec", completed as f64 / elapsed));
        }

        line
    }
}

/// Format a byte count the way the final summary reports it
pub fn format_bytes(bytes: u64) -> String {
    const MIB: f64 = 1024.0 * 1024.0;
    if bytes < 1024 {
        format!("{bytes} B")
    } else if (bytes as f64) < MIB {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{:.2} MiB", bytes as f64 / MIB)
    }
}
