//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler:
//! - Building the HTTP client
//! - GET requests for listing pages
//! - Classifying transport failures and non-2xx responses
//!
//! The crawl loop only sees the [`PageSource`] interface, so it can be driven
//! by fixture documents as well as by the network.

use crate::HarvestError;
use reqwest::Client;
use scraper::Html;

/// Something that can turn a URL into a parsed HTML document
///
/// A `None` means the page could not be obtained; the implementation is
/// responsible for logging why.
// Crawls run on a single task, so the returned future needs no Send bound.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch(&self, url: &str) -> Option<Html>;
}

/// Builds an HTTP client with default settings
///
/// No custom headers, timeouts or retry policy are configured.
pub fn build_http_client() -> Result<Client, reqwest::Error> {
    Client::builder().build()
}

/// Network-backed page source
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a fetcher with a freshly built default client
    pub fn new() -> Result<Self, HarvestError> {
        Ok(Self {
            client: build_http_client()?,
        })
    }

    /// Fetches a page and parses the body as HTML
    ///
    /// # Errors
    ///
    /// * `HarvestError::Http` - Transport-level failure (DNS, connect, body read)
    /// * `HarvestError::Status` - The server answered with a non-2xx status
    pub async fn fetch_page(&self, url: &str) -> Result<Html, HarvestError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| HarvestError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(HarvestError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| HarvestError::Http {
            url: url.to_string(),
            source,
        })?;

        Ok(Html::parse_document(&body))
    }
}

impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<Html> {
        match self.fetch_page(url).await {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::error!("Failed to fetch {}: {}", url, e);
                None
            }
        }
    }
}
