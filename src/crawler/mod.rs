//! Crawler module for walking the quote listing
//!
//! This module contains the core crawling logic:
//! - HTTP fetching behind the `PageSource` interface
//! - Quote extraction from listing pages
//! - Next-page link lookup
//! - The page-walk loop that ties them together

mod coordinator;
mod extractor;
mod fetcher;
mod locator;

pub use coordinator::{run_crawl, Crawler};
pub use extractor::{extract_quote, extract_quotes, ExtractError, PageExtraction};
pub use fetcher::{build_http_client, HttpFetcher, PageSource};
pub use locator::{locate_next, next_page_url, LocateError};
