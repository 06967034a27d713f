use crate::url::site_origin;
use crate::UrlResult;
use serde::Deserialize;
use url::Url;

/// Listing page the crawl starts from when none is given
pub const DEFAULT_START_URL: &str = "https://quotes.toscrape.com/";

/// File the collected quotes are written to when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "quotes.json";

/// Main configuration structure for Quote-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlConfig {
    /// First listing page to fetch
    #[serde(rename = "start-url")]
    pub start_url: String,

    /// Origin that next-page links are resolved against.
    /// Derived from the start URL when absent.
    #[serde(default)]
    pub origin: Option<String>,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the JSON output file
    #[serde(rename = "output-path", default = "default_output_path")]
    pub output_path: String,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
        }
    }
}

impl Config {
    /// Creates a configuration from a start URL and an output path
    ///
    /// # Example
    ///
    /// ```
    /// use quote_harvest::config::Config;
    ///
    /// let config = Config::new("https://quotes.toscrape.com/", "quotes.json");
    /// assert_eq!(config.origin().unwrap().as_str(), "https://quotes.toscrape.com/");
    /// ```
    pub fn new(start_url: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            crawl: CrawlConfig {
                start_url: start_url.into(),
                origin: None,
            },
            output: OutputConfig {
                output_path: output_path.into(),
            },
        }
    }

    /// Sets an explicit origin for link resolution
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.crawl.origin = Some(origin.into());
        self
    }

    /// Returns the origin links are resolved against
    pub fn origin(&self) -> UrlResult<Url> {
        match &self.crawl.origin {
            Some(origin) => site_origin(origin),
            None => site_origin(&self.crawl.start_url),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_START_URL, DEFAULT_OUTPUT_PATH)
    }
}
