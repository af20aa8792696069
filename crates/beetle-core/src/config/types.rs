//! Configuration type definitions.
//!
//! Every field is optional so that a project config can override a single
//! value from the user config. Accessors resolve unset fields to defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [server]
//! base_url = "http://127.0.0.1:8000"
//! types_path = "types"
//! device_collection = "BeetleUI"
//! strip_collection = "LightStrip"
//! request_timeout_ms = 5000
//!
//! [refresh]
//! initial_backoff_ms = 500
//! max_backoff_ms = 10000
//! reset_on_success = false
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BeetleConfig {
    /// Where the device server lives and how its collections are named
    #[serde(default)]
    pub server: ServerConfig,

    /// Polling and backoff behavior
    #[serde(default)]
    pub refresh: RefreshConfig,
}

/// Device server location and collection names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    /// Base URL of the device server.
    /// Default: `http://127.0.0.1:8000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Path of the type listing used during bootstrap.
    /// Default: `types`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types_path: Option<String>,

    /// Name of the device-state collection.
    /// Default: `BeetleUI`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_collection: Option<String>,

    /// Name of the light strip collection.
    /// Default: `LightStrip`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_collection: Option<String>,

    /// Per-request timeout in milliseconds.
    /// Default: 5000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
}

/// Refresh loop configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RefreshConfig {
    /// Delay between cycles before any failure, in milliseconds.
    /// Default: 500ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_backoff_ms: Option<u64>,

    /// Upper bound for the doubled delay, in milliseconds.
    /// Default: 10000ms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_backoff_ms: Option<u64>,

    /// Return to the initial delay after a fully successful cycle.
    /// Default: false (the delay only ever grows).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reset_on_success: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beetle_config_serialization() {
        let config = BeetleConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: BeetleConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_refresh_config_serialization() {
        let config = RefreshConfig {
            initial_backoff_ms: Some(250),
            max_backoff_ms: Some(4000),
            reset_on_success: Some(true),
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("initial_backoff_ms = 250"));
        assert!(toml_str.contains("reset_on_success = true"));
    }

    #[test]
    fn test_server_config_deserialize() {
        let toml_str = r#"
base_url = "http://lights.local:8000"
strip_collection = "Strips"
"#;
        let server: ServerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(server.base_url.as_deref(), Some("http://lights.local:8000"));
        assert_eq!(server.strip_collection.as_deref(), Some("Strips"));
        assert!(server.device_collection.is_none());
    }
}
