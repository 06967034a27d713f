//! Configuration module for Quote-Harvest
//!
//! Configuration is normally built directly with [`Config::new`]; the binary can
//! also load it from a TOML file.
//!
//! # Example
//!
//! ```no_run
//! use quote_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Crawl starts at: {}", config.crawl.start_url);
//! ```

mod parser;
mod types;
mod validation;

use std::time::Duration;

// Re-export types
pub use types::{Config, CrawlConfig, OutputConfig, DEFAULT_OUTPUT_PATH, DEFAULT_START_URL};

// Re-export parser functions
pub use parser::{load_config, parse_config};
pub use validation::validate;

/// Fixed politeness delay imposed after every successfully fetched page
pub const REQUEST_DELAY: Duration = Duration::from_millis(300);
