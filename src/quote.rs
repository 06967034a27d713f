//! Quote record definition

use serde::{Deserialize, Serialize};

/// A single quote scraped from a listing page
///
/// Records have no identity beyond their position in the output sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text, exactly as rendered on the page
    pub text: String,

    /// The author's display name
    pub author: String,

    /// Tag labels in page order
    pub tags: Vec<String>,
}

impl Quote {
    /// Creates a new quote record
    pub fn new(text: impl Into<String>, author: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            tags,
        }
    }
}
