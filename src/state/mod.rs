//! State module for tracking crawl progress
//!
//! The crawl is a two-state machine: it is either `Running` with a current
//! listing URL, or `Done` with the reason it stopped.

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlState, StopReason};
