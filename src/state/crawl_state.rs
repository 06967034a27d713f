/// Crawl state definitions
///
/// This module defines the crawl state machine and its transition rules.
use std::fmt;

/// Why a crawl reached the `Done` state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The page at `url` could not be fetched
    FetchFailed { url: String },

    /// The last page had no usable next-page link
    NoNextPage,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FetchFailed { url } => write!(f, "fetch failed for {}", url),
            Self::NoNextPage => write!(f, "no next page"),
        }
    }
}

/// Represents the current state of a crawl
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrawlState {
    /// A listing page is waiting to be fetched
    Running { url: String },

    /// The crawl is over; nothing is fetched after this
    Done(StopReason),
}

impl CrawlState {
    /// Initial state for a crawl starting at `url`
    pub fn start(url: impl Into<String>) -> Self {
        Self::Running { url: url.into() }
    }

    /// RUNNING -> RUNNING when the page was processed and a next URL was found,
    /// RUNNING -> DONE when there is no next page.
    pub fn after_page(self, next_url: Option<String>) -> Self {
        match (self, next_url) {
            (Self::Running { .. }, Some(url)) => Self::Running { url },
            (Self::Running { .. }, None) => Self::Done(StopReason::NoNextPage),
            (done, _) => done,
        }
    }

    /// RUNNING -> DONE when the current page could not be fetched
    pub fn after_fetch_failure(self) -> Self {
        match self {
            Self::Running { url } => Self::Done(StopReason::FetchFailed { url }),
            done => done,
        }
    }

    /// Returns the URL to fetch next, if the crawl is still running
    pub fn current_url(&self) -> Option<&str> {
        match self {
            Self::Running { url } => Some(url),
            Self::Done(_) => None,
        }
    }

    /// Returns true once the crawl has stopped
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Returns the stop reason for a finished crawl
    pub fn stop_reason(&self) -> Option<&StopReason> {
        match self {
            Self::Done(reason) => Some(reason),
            Self::Running { .. } => None,
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running { url } => write!(f, "running ({})", url),
            Self::Done(reason) => write!(f, "done ({})", reason),
        }
    }
}
