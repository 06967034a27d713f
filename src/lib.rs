//! Quote-Harvest: a paginated quote listing crawler
//!
//! This crate walks the "next page" chain of a quote listing site, extracts
//! every quote fragment (text, author, tags) and writes the collected records
//! to a single JSON document at the end of the run.

pub mod config;
pub mod crawler;
pub mod logging;
pub mod output;
pub mod quote;
pub mod state;
pub mod url;

use thiserror::Error;

/// Main error type for Quote-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("HTTP status {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("URL error: {0}")]
    UrlError(#[from] UrlError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),

    #[error("Missing host in URL: {0}")]
    MissingHost(String),

    #[error("Empty link target")]
    EmptyHref,
}

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, Crawler};
pub use output::CrawlSummary;
pub use quote::Quote;
pub use state::{CrawlState, StopReason};
