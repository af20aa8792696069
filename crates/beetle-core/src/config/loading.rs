//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.beetle/config.toml`
//! 3. **Project config** - `./.beetle/config.toml`
//! 4. **CLI arguments** - applied by the caller on the returned config

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::types::{BeetleConfig, RefreshConfig, ServerConfig};
use crate::errors::ConfigError;

const CONFIG_DIR: &str = ".beetle";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed.
/// Missing files are not errors. Values are not validated here: callers
/// apply their overrides first and then call [`BeetleConfig::validate`].
pub fn load_hierarchy() -> Result<BeetleConfig, ConfigError> {
    let mut paths = Vec::with_capacity(2);
    match user_config_path() {
        Ok(path) => paths.push(path),
        Err(e) => debug!(event = "core.config.user_config_skipped", error = %e),
    }
    paths.push(project_config_path()?);

    load_from_paths(&paths)
}

/// Load and merge the given config files in order.
pub fn load_from_paths(paths: &[PathBuf]) -> Result<BeetleConfig, ConfigError> {
    let mut config = BeetleConfig::default();

    for path in paths {
        if let Some(file_config) = load_config_file(path)? {
            debug!(event = "core.config.file_loaded", path = %path.display());
            config = merge_configs(config, file_config);
        }
    }

    Ok(config)
}

/// `~/.beetle/config.toml`
pub fn user_config_path() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
    Ok(home_dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// `./.beetle/config.toml`
pub fn project_config_path() -> Result<PathBuf, ConfigError> {
    Ok(std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a configuration file, returning `None` when it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<BeetleConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|e| ConfigError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Merge two configurations, with `override_config` taking precedence.
///
/// Each field is taken from the override only when it is set there.
pub fn merge_configs(base: BeetleConfig, override_config: BeetleConfig) -> BeetleConfig {
    let server = override_config.server;
    let refresh = override_config.refresh;

    BeetleConfig {
        server: ServerConfig {
            base_url: server.base_url.or(base.server.base_url),
            types_path: server.types_path.or(base.server.types_path),
            device_collection: server.device_collection.or(base.server.device_collection),
            strip_collection: server.strip_collection.or(base.server.strip_collection),
            request_timeout_ms: server
                .request_timeout_ms
                .or(base.server.request_timeout_ms),
        },
        refresh: RefreshConfig {
            initial_backoff_ms: refresh
                .initial_backoff_ms
                .or(base.refresh.initial_backoff_ms),
            max_backoff_ms: refresh.max_backoff_ms.or(base.refresh.max_backoff_ms),
            reset_on_success: refresh.reset_on_success.or(base.refresh.reset_on_success),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config_file(&dir.path().join("config.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_config_hierarchy_integration() {
        let dir = tempfile::tempdir().unwrap();
        let user_path = dir.path().join("user.toml");
        let project_path = dir.path().join("project.toml");

        fs::write(
            &user_path,
            r#"
[server]
base_url = "http://lights.local:8000"
strip_collection = "Strips"

[refresh]
initial_backoff_ms = 250
"#,
        )
        .unwrap();
        fs::write(
            &project_path,
            r#"
[server]
strip_collection = "LightStrip"

[refresh]
reset_on_success = true
"#,
        )
        .unwrap();

        let config = load_from_paths(&[user_path, project_path]).unwrap();
        assert_eq!(config.server.base_url(), "http://lights.local:8000"); // From user
        assert_eq!(config.server.strip_collection(), "LightStrip"); // Overridden by project
        assert_eq!(config.refresh.initial_backoff_ms(), 250); // From user
        assert!(config.refresh.reset_on_success()); // From project
        assert_eq!(config.refresh.max_backoff_ms(), 10_000); // Default
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "invalid toml [[[").unwrap();

        let err = load_from_paths(&[path.clone()]).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains(&path.display().to_string()));
    }

    #[test]
    fn test_invalid_values_survive_loading() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[server]
base_url = "http://lights.local:8000"

[refresh]
initial_backoff_ms = 60000
"#,
        )
        .unwrap();

        let mut config = load_from_paths(&[path]).unwrap();
        assert_eq!(config.server.base_url(), "http://lights.local:8000");
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::InvalidConfiguration { .. }
        ));

        // a later override can make the bounds consistent again
        config.refresh.max_backoff_ms = Some(120_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_keeps_base_when_override_unset() {
        let base: BeetleConfig = toml::from_str(
            r#"
[refresh]
max_backoff_ms = 4000
"#,
        )
        .unwrap();
        let merged = merge_configs(base, BeetleConfig::default());
        assert_eq!(merged.refresh.max_backoff_ms(), 4000);
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty: BeetleConfig = toml::from_str("").unwrap();
        assert_eq!(empty, BeetleConfig::default());

        let invalid: Result<BeetleConfig, _> = toml::from_str("[refresh]\ninitial_backoff_ms = \"fast\"");
        assert!(invalid.is_err());
    }
}
