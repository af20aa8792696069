//! Configuration validation.

use crate::config::types::BeetleConfig;
use crate::errors::ConfigError;

fn invalid(message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidConfiguration {
        message: message.into(),
    }
}

/// Validate the resolved configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` naming the first offending field.
pub fn validate_config(config: &BeetleConfig) -> Result<(), ConfigError> {
    let server = &config.server;
    let base_url = server.base_url();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(invalid(format!(
            "server.base_url must start with http:// or https:// (got '{}')",
            base_url
        )));
    }

    for (field, value) in [
        ("server.types_path", server.types_path()),
        ("server.device_collection", server.device_collection()),
        ("server.strip_collection", server.strip_collection()),
    ] {
        if value.trim().is_empty() {
            return Err(invalid(format!("{} cannot be empty", field)));
        }
    }

    if server.request_timeout_ms() == 0 {
        return Err(invalid("server.request_timeout_ms must be greater than 0"));
    }

    let refresh = &config.refresh;
    if refresh.initial_backoff_ms() == 0 {
        return Err(invalid("refresh.initial_backoff_ms must be greater than 0"));
    }
    if refresh.initial_backoff_ms() > refresh.max_backoff_ms() {
        return Err(invalid(format!(
            "refresh.initial_backoff_ms ({}) cannot exceed refresh.max_backoff_ms ({})",
            refresh.initial_backoff_ms(),
            refresh.max_backoff_ms()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&BeetleConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = BeetleConfig::default();
        config.server.base_url = Some("ftp://lights".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("server.base_url"));
    }

    #[test]
    fn test_rejects_empty_collection_name() {
        let mut config = BeetleConfig::default();
        config.server.strip_collection = Some("  ".to_string());
        let err = validate_config(&config).unwrap_err();
        assert!(
            err.to_string()
                .contains("server.strip_collection cannot be empty")
        );
    }

    #[test]
    fn test_rejects_zero_backoff() {
        let mut config = BeetleConfig::default();
        config.refresh.initial_backoff_ms = Some(0);
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_initial_above_cap() {
        let mut config = BeetleConfig::default();
        config.refresh.initial_backoff_ms = Some(20_000);
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("cannot exceed"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = BeetleConfig::default();
        config.server.request_timeout_ms = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
