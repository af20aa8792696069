use std::io::{self, IsTerminal};

use clap::ArgMatches;
use tracing::{info, warn};

use beetle_core::{HttpRefreshLoop, LoopExit};

use super::helpers::{connect, resolve_config};
use crate::dashboard::Dashboard;

pub(crate) async fn handle_watch_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = resolve_config(matches)?;

    info!(
        event = "cli.watch_started",
        base_url = config.server.base_url(),
        initial_backoff_ms = config.refresh.initial_backoff_ms(),
        max_backoff_ms = config.refresh.max_backoff_ms(),
        reset_on_success = config.refresh.reset_on_success()
    );

    let (client, listing) = connect(&config).await?;

    let mut refresh = HttpRefreshLoop::from_config(client, &config);
    let interactive = io::stdout().is_terminal();
    refresh.subscribe(
        Dashboard::new(io::stdout(), config.server.base_url())
            .with_colors(interactive)
            .live(interactive),
    );
    refresh.announce_types(&listing);

    let suspend = refresh.suspend_handle();

    // Dropping the loop future on Ctrl-C abandons any request in flight
    let cycles = tokio::select! {
        exit = refresh.run() => match exit {
            LoopExit::Suspended { cycles } => cycles,
        },
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                warn!(event = "cli.watch.signal_failed", error = %e);
            }
            suspend.suspend();
            refresh.cycles()
        }
    };

    println!();
    println!("Stopped polling after {} cycles.", cycles);

    info!(
        event = "cli.watch_completed",
        cycles = cycles,
        backoff_ms = refresh.backoff().current().as_millis() as u64
    );

    Ok(())
}
