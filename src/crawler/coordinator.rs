//! Crawler coordinator - the page-walk loop
//!
//! Starting from the configured URL, each iteration fetches a page, appends
//! its quotes to the collection, and looks up the next page. The loop is the
//! [`CrawlState`] machine: it leaves `Running` when a fetch fails or no next
//! page exists, and the collection is persisted exactly once after that.

use crate::config::{validate, Config, REQUEST_DELAY};
use crate::crawler::extractor::{extract_quotes, PageExtraction};
use crate::crawler::fetcher::{HttpFetcher, PageSource};
use crate::crawler::locator::next_page_url;
use crate::output::{persist, CrawlSummary};
use crate::quote::Quote;
use crate::state::{CrawlState, StopReason};
use crate::HarvestError;
use chrono::Local;
use scraper::Html;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Result of visiting one page
enum PageVisit {
    /// Page fetched and processed; carries the next URL, if any
    Fetched { next: Option<String> },

    /// Page could not be fetched
    Failed,
}

/// Main crawler structure
pub struct Crawler<S: PageSource> {
    source: S,
    start_url: String,
    origin: Url,
    output_path: PathBuf,
    delay: Duration,
    quotes: Vec<Quote>,
    pages_fetched: u32,
    pages_truncated: u32,
}

impl Crawler<HttpFetcher> {
    /// Creates a crawler that fetches pages over HTTP
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Successfully created crawler
    /// * `Err(HarvestError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new()?;
        Self::with_source(config, fetcher)
    }
}

impl<S: PageSource> Crawler<S> {
    /// Creates a crawler over an arbitrary page source
    pub fn with_source(config: Config, source: S) -> Result<Self, HarvestError> {
        validate(&config)?;
        let origin = config.origin()?;

        Ok(Self {
            source,
            start_url: config.crawl.start_url,
            origin,
            output_path: PathBuf::from(config.output.output_path),
            delay: REQUEST_DELAY,
            quotes: Vec::new(),
            pages_fetched: 0,
            pages_truncated: 0,
        })
    }

    /// Runs the crawl to completion and saves the collected quotes
    ///
    /// Failures never escape: a failed fetch ends the crawl, a malformed
    /// quote block ends extraction for its page, a malformed next-page link
    /// ends the crawl, and a failed save is logged.
    pub async fn run(mut self) -> CrawlSummary {
        let started_at = Local::now();
        tracing::info!("Starting crawl at {}", self.start_url);

        let mut state = CrawlState::start(self.start_url.clone());

        while let Some(url) = state.current_url().map(str::to_string) {
            state = match self.visit(&url).await {
                PageVisit::Fetched { next } => {
                    tokio::time::sleep(self.delay).await;
                    state.after_page(next)
                }
                PageVisit::Failed => {
                    tracing::error!("Crawl stopped: could not fetch {}", url);
                    state.after_fetch_failure()
                }
            };
        }

        let saved = persist(&self.quotes, &self.output_path);

        let summary = CrawlSummary {
            started_at,
            finished_at: Local::now(),
            pages_fetched: self.pages_fetched,
            pages_truncated: self.pages_truncated,
            quotes_collected: self.quotes.len(),
            stop_reason: state
                .stop_reason()
                .cloned()
                .unwrap_or(StopReason::NoNextPage),
            saved,
            output_path: self.output_path,
        };
        summary.log();
        summary
    }

    /// Fetches one page and processes it
    async fn visit(&mut self, url: &str) -> PageVisit {
        tracing::info!("Parsing page: {}", url);

        match self.source.fetch(url).await {
            Some(document) => PageVisit::Fetched {
                next: self.process_page(url, &document),
            },
            None => PageVisit::Failed,
        }
    }

    /// Extracts quotes from a fetched page and returns the next page URL
    fn process_page(&mut self, url: &str, document: &Html) -> Option<String> {
        self.pages_fetched += 1;

        let PageExtraction {
            extracted,
            aborted_at,
        } = extract_quotes(document, &mut self.quotes);

        if let Some(index) = aborted_at {
            self.pages_truncated += 1;
            tracing::warn!(
                "Kept {} quotes from {} before malformed block #{}",
                extracted,
                url,
                index + 1
            );
        } else {
            tracing::debug!("Extracted {} quotes from {}", extracted, url);
        }

        next_page_url(document, &self.origin)
    }
}

/// Runs a complete crawl over HTTP
///
/// This is the main entry point for a crawl. It will:
/// 1. Validate the configuration
/// 2. Build the HTTP client
/// 3. Walk the listing pages
/// 4. Save the collected quotes
///
/// Only construction errors are returned; everything after that is logged.
pub async fn run_crawl(config: Config) -> Result<CrawlSummary, HarvestError> {
    let crawler = Crawler::new(config)?;
    Ok(crawler.run().await)
}
