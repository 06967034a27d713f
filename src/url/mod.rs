//! URL handling module for Quote-Harvest
//!
//! This module derives the site origin from a start URL and resolves the
//! (usually relative) link targets found on listing pages against it.

mod origin;
mod resolve;

// Re-export main functions
pub use origin::{parse_http_url, site_origin};
pub use resolve::resolve_href;
