use crate::UrlError;
use url::Url;

/// Parses a URL string and checks that it is an absolute HTTP(S) URL with a host
///
/// # Arguments
///
/// * `url_str` - The URL string to parse
///
/// # Returns
///
/// * `Ok(Url)` - The parsed URL
/// * `Err(UrlError)` - Malformed URL, unsupported scheme or missing host
pub fn parse_http_url(url_str: &str) -> Result<Url, UrlError> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::MissingHost(url_str.to_string()));
    }

    Ok(url)
}

/// Reduces a URL to its origin (scheme, host and port) with a root path
///
/// # Examples
///
/// ```
/// use quote_harvest::url::site_origin;
///
/// let origin = site_origin("https://quotes.toscrape.com/page/3/?x=1#top").unwrap();
/// assert_eq!(origin.as_str(), "https://quotes.toscrape.com/");
/// ```
pub fn site_origin(url_str: &str) -> Result<Url, UrlError> {
    let mut url = parse_http_url(url_str)?;
    url.set_path("/");
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
