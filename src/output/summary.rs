//! Crawl summary

use crate::state::StopReason;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// Outcome of a finished crawl
#[derive(Debug, Clone)]
pub struct CrawlSummary {
    pub started_at: DateTime<Local>,
    pub finished_at: DateTime<Local>,

    /// Pages fetched and processed
    pub pages_fetched: u32,

    /// Pages whose extraction stopped at a malformed quote block
    pub pages_truncated: u32,

    /// Quotes written (or meant to be written) to the output file
    pub quotes_collected: usize,

    pub stop_reason: StopReason,

    /// Whether the output file was written
    pub saved: bool,

    pub output_path: PathBuf,
}

impl CrawlSummary {
    /// Wall-clock duration of the crawl in seconds
    pub fn duration_seconds(&self) -> f64 {
        (self.finished_at - self.started_at).num_milliseconds() as f64 / 1000.0
    }

    /// Returns true if the crawl ran to the last page and saved its output
    pub fn is_complete(&self) -> bool {
        self.saved && self.stop_reason == StopReason::NoNextPage
    }

    /// Logs a one-line summary of the run
    pub fn log(&self) {
        tracing::info!(
            "Crawl finished ({}): {} pages, {} quotes, {} truncated pages in {:.2}s",
            self.stop_reason,
            self.pages_fetched,
            self.quotes_collected,
            self.pages_truncated,
            self.duration_seconds()
        );
    }
}
