//! Output module for persisting collected quotes
//!
//! This module handles:
//! - Writing the quote collection as a JSON document
//! - Summarizing a finished crawl

mod json;
mod summary;

pub use json::{persist, save_quotes, write_quotes_json};
pub use summary::CrawlSummary;

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
