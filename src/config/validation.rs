use crate::config::types::{Config, CrawlConfig, OutputConfig};
use crate::url::parse_http_url;
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawl)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl configuration
fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    parse_http_url(&config.start_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid start-url: {}", e)))?;

    if let Some(origin) = &config.origin {
        parse_http_url(origin)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid origin: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.output_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
