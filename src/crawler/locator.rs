//! Next-page link lookup
//!
//! Listing pages mark the link to the following page with an `li.next`
//! element wrapping an anchor. A missing marker ends the crawl normally; a
//! marker that cannot be turned into a URL also ends it, with a warning.

use crate::url::resolve_href;
use crate::UrlError;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use thiserror::Error;
use url::Url;

const E: &str = "Invalid selector";
lazy_static! {
    static ref NEXT_MARKER: Selector = Selector::parse("li.next").expect(E);
    static ref ANCHOR: Selector = Selector::parse("a").expect(E);
}

/// The next-page marker exists but does not lead anywhere usable
#[derive(Debug, Error)]
pub enum LocateError {
    #[error("next-page marker has no link")]
    MissingAnchor,

    #[error("next-page link has no href")]
    MissingHref,

    #[error("next-page link cannot be resolved: {0}")]
    Unresolvable(#[from] UrlError),
}

/// Looks up the next-page link and resolves it against `origin`
///
/// # Returns
///
/// * `Ok(Some(url))` - Absolute URL of the next page
/// * `Ok(None)` - The page has no next-page marker
/// * `Err(LocateError)` - The marker is present but malformed
pub fn locate_next(document: &Html, origin: &Url) -> Result<Option<String>, LocateError> {
    let marker = match document.select(&NEXT_MARKER).next() {
        Some(marker) => marker,
        None => return Ok(None),
    };

    let anchor = marker
        .select(&ANCHOR)
        .next()
        .ok_or(LocateError::MissingAnchor)?;
    let href = anchor
        .value()
        .attr("href")
        .ok_or(LocateError::MissingHref)?;

    Ok(Some(resolve_href(origin, href)?))
}

/// Returns the next page URL, or `None` when the crawl should stop
///
/// Malformed markers are logged and treated the same as a missing one.
pub fn next_page_url(document: &Html, origin: &Url) -> Option<String> {
    match locate_next(document, origin) {
        Ok(Some(url)) => Some(url),
        Ok(None) => {
            tracing::debug!("No next-page marker found");
            None
        }
        Err(e) => {
            tracing::warn!("Could not read the next-page link: {}", e);
            None
        }
    }
}
