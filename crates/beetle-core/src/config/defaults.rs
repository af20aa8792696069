//! Default values for configuration fields left unset.

use std::time::Duration;

use crate::config::types::{RefreshConfig, ServerConfig};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TYPES_PATH: &str = "types";
pub const DEFAULT_DEVICE_COLLECTION: &str = "BeetleUI";
pub const DEFAULT_STRIP_COLLECTION: &str = "LightStrip";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 5000;

/// Poll period of the original browser client.
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;

/// Failures never push the poll period beyond ten seconds.
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 10_000;

impl ServerConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn types_path(&self) -> &str {
        self.types_path.as_deref().unwrap_or(DEFAULT_TYPES_PATH)
    }

    pub fn device_collection(&self) -> &str {
        self.device_collection
            .as_deref()
            .unwrap_or(DEFAULT_DEVICE_COLLECTION)
    }

    pub fn strip_collection(&self) -> &str {
        self.strip_collection
            .as_deref()
            .unwrap_or(DEFAULT_STRIP_COLLECTION)
    }

    pub fn request_timeout_ms(&self) -> u64 {
        self.request_timeout_ms
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms())
    }
}

impl RefreshConfig {
    pub fn initial_backoff_ms(&self) -> u64 {
        self.initial_backoff_ms
            .unwrap_or(DEFAULT_INITIAL_BACKOFF_MS)
    }

    pub fn max_backoff_ms(&self) -> u64 {
        self.max_backoff_ms.unwrap_or(DEFAULT_MAX_BACKOFF_MS)
    }

    pub fn reset_on_success(&self) -> bool {
        self.reset_on_success.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_defaults() {
        let server = ServerConfig::default();
        assert_eq!(server.base_url(), "http://127.0.0.1:8000");
        assert_eq!(server.types_path(), "types");
        assert_eq!(server.device_collection(), "BeetleUI");
        assert_eq!(server.strip_collection(), "LightStrip");
        assert_eq!(server.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_refresh_defaults() {
        let refresh = RefreshConfig::default();
        assert_eq!(refresh.initial_backoff_ms(), 500);
        assert_eq!(refresh.max_backoff_ms(), 10_000);
        assert!(!refresh.reset_on_success());
    }
}
