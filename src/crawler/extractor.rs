//! Quote extraction from listing pages
//!
//! Every `div.quote` block yields one [`Quote`]: the text from `span.text`,
//! the author from `small.author` and the labels of all `a.tag` links.

use crate::quote::Quote;
use lazy_static::lazy_static;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

const E: &str = "Invalid selector";
lazy_static! {
    static ref QUOTE_BLOCK: Selector = Selector::parse("div.quote").expect(E);
    static ref QUOTE_TEXT: Selector = Selector::parse("span.text").expect(E);
    static ref QUOTE_AUTHOR: Selector = Selector::parse("small.author").expect(E);
    static ref QUOTE_TAG: Selector = Selector::parse("a.tag").expect(E);
}

/// A quote block is missing one of its required elements
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("missing <{field}> element")]
    MissingField { field: &'static str },
}

/// What happened while extracting one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageExtraction {
    /// Number of quotes appended for this page
    pub extracted: usize,

    /// Zero-based index of the malformed block that stopped extraction
    pub aborted_at: Option<usize>,
}

impl PageExtraction {
    /// Returns true if the page was cut short by a malformed block
    pub fn is_truncated(&self) -> bool {
        self.aborted_at.is_some()
    }
}

/// Extracts a single quote from its block element
pub fn extract_quote(block: ElementRef<'_>) -> Result<Quote, ExtractError> {
    let text = block
        .select(&QUOTE_TEXT)
        .next()
        .ok_or(ExtractError::MissingField { field: "span.text" })?
        .text()
        .collect::<String>();

    let author = block
        .select(&QUOTE_AUTHOR)
        .next()
        .ok_or(ExtractError::MissingField {
            field: "small.author",
        })?
        .text()
        .collect::<String>();

    let tags = block
        .select(&QUOTE_TAG)
        .map(|tag| tag.text().collect::<String>())
        .collect();

    Ok(Quote { text, author, tags })
}

/// Appends every quote on the page to `quotes`, in document order
///
/// The first malformed block ends extraction for the whole page. Quotes
/// taken from earlier blocks stay in `quotes`; later blocks are ignored.
pub fn extract_quotes(document: &Html, quotes: &mut Vec<Quote>) -> PageExtraction {
    let mut result = PageExtraction::default();

    for (index, block) in document.select(&QUOTE_BLOCK).enumerate() {
        match extract_quote(block) {
            Ok(quote) => {
                tracing::debug!("Quote #{} by {}", index + 1, quote.author);
                quotes.push(quote);
                result.extracted += 1;
            }
            Err(e) => {
                tracing::warn!(
                    "Malformed quote block #{}: {}; skipping the rest of the page",
                    index + 1,
                    e
                );
                result.aborted_at = Some(index);
                break;
            }
        }
    }

    result
}
