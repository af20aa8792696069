//! # Configuration System
//!
//! Hierarchical TOML configuration for the beetle client.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.beetle/config.toml` (global user preferences)
//! 3. **Project config** - `./.beetle/config.toml` (per-directory overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.beetle/config.toml
//! [server]
//! base_url = "http://10.0.0.12:8000"
//! strip_collection = "LightStrip"
//!
//! [refresh]
//! initial_backoff_ms = 250
//! reset_on_success = true
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use beetle_core::config::BeetleConfig;
//!
//! fn example() -> Result<(), beetle_core::errors::ConfigError> {
//!     let config = BeetleConfig::load_hierarchy()?;
//!     println!("polling {}", config.server.base_url());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{BeetleConfig, RefreshConfig, ServerConfig};
pub use validation::validate_config;

impl BeetleConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}
