use clap::ArgMatches;
use tracing::{error, warn};

use beetle_core::BeetleConfig;
use beetle_core::bootstrap::{self, TypeListing};
use beetle_core::events;
use beetle_core::source::build_client;

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
pub fn load_config_with_warning() -> BeetleConfig {
    match BeetleConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.beetle/config.toml and ./.beetle/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            BeetleConfig::default()
        }
    }
}

/// Apply whichever override flags the subcommand defines and the user passed.
pub fn apply_cli_overrides(config: &mut BeetleConfig, matches: &ArgMatches) {
    if let Some(url) = matches.get_one::<String>("url") {
        config.server.base_url = Some(url.clone());
    }
    if let Some(timeout) = matches.get_one::<u64>("timeout") {
        config.server.request_timeout_ms = Some(*timeout);
    }
    if let Ok(Some(initial)) = matches.try_get_one::<u64>("initial-backoff") {
        config.refresh.initial_backoff_ms = Some(*initial);
    }
    if let Ok(Some(max)) = matches.try_get_one::<u64>("max-backoff") {
        config.refresh.max_backoff_ms = Some(*max);
    }
    if let Ok(Some(true)) = matches.try_get_one::<bool>("reset-on-success") {
        config.refresh.reset_on_success = Some(true);
    }
}

/// Config file hierarchy plus CLI flags, validated.
pub fn resolve_config(matches: &ArgMatches) -> Result<BeetleConfig, Box<dyn std::error::Error>> {
    let mut config = load_config_with_warning();
    apply_cli_overrides(&mut config, matches);

    if let Err(e) = config.validate() {
        eprintln!("❌ Invalid configuration: {}", e);
        error!(event = "cli.config.invalid", error = %e);
        return Err(Box::new(e));
    }

    Ok(config)
}

/// Build the HTTP client and check that the server publishes both collections.
pub async fn connect(
    config: &BeetleConfig,
) -> Result<(reqwest::Client, TypeListing), Box<dyn std::error::Error>> {
    let client = build_client(config.server.request_timeout())?;

    match bootstrap::load_types(&client, &config.server).await {
        Ok(listing) => Ok((client, listing)),
        Err(e) => {
            eprintln!("❌ Could not connect to {}: {}", config.server.base_url(), e);
            error!(
                event = "cli.bootstrap_failed",
                base_url = config.server.base_url(),
                error = %e
            );
            events::log_app_error(&e);
            Err(Box::new(e))
        }
    }
}
