use clap::ArgMatches;
use tracing::error;

use beetle_core::events;

mod helpers;
mod snapshot;
mod watch;

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    let result = match matches.subcommand() {
        Some(("watch", sub_matches)) => watch::handle_watch_command(sub_matches).await,
        Some(("snapshot", sub_matches)) => snapshot::handle_snapshot_command(sub_matches).await,
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    };

    events::log_app_shutdown();
    result
}
