use reqwest::Url;

use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - api.base_url is an absolute http(s) URL
/// - api.max_pages, when set, is at least 1
/// - allocation.target_product is not blank
/// - report.output_path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let url = Url::parse(&config.api.base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "api.base_url '{}' is not a valid URL: {}",
            config.api.base_url, e
        ))
    })?;
    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::ValidationError(format!(
            "api.base_url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.api.max_pages == Some(0) {
        return Err(ConfigError::ValidationError(
            "api.max_pages cannot be 0".to_string(),
        ));
    }

    if config.allocation.target_product.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "allocation.target_product cannot be empty".to_string(),
        ));
    }

    if config.report.output_path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "report.output_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}
