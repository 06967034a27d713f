use crate::UrlError;
use url::Url;

/// Resolves a link href against the site origin
///
/// Absolute hrefs are kept as they are, root-relative and path-relative hrefs
/// are joined onto the origin. Only HTTP(S) results are accepted.
///
/// # Arguments
///
/// * `origin` - The site origin (see [`site_origin`](super::site_origin))
/// * `href` - The raw `href` attribute value
///
/// # Returns
///
/// * `Ok(String)` - Absolute URL
/// * `Err(UrlError)` - Empty href, unparseable href or non-HTTP(S) target
pub fn resolve_href(origin: &Url, href: &str) -> Result<String, UrlError> {
    let href = href.trim();

    if href.is_empty() {
        return Err(UrlError::EmptyHref);
    }

    let absolute = origin
        .join(href)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))?;

    if absolute.scheme() != "http" && absolute.scheme() != "https" {
        return Err(UrlError::InvalidScheme(absolute.scheme().to_string()));
    }

    Ok(absolute.to_string())
}
