use std::io::{self, IsTerminal};

use clap::ArgMatches;
use tracing::{error, info};

use beetle_core::{DeviceState, HttpRefreshLoop, StripRecord};

use super::helpers::{connect, resolve_config};
use crate::dashboard::Dashboard;

#[derive(serde::Serialize)]
struct SnapshotResponse<'a> {
    device: Option<&'a DeviceState>,
    strips: Vec<&'a StripRecord>,
}

pub(crate) async fn handle_snapshot_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let config = resolve_config(matches)?;

    info!(
        event = "cli.snapshot_started",
        base_url = config.server.base_url(),
        json_output = json_output
    );

    let (client, listing) = connect(&config).await?;

    let mut refresh = HttpRefreshLoop::from_config(client, &config);
    if !json_output {
        refresh.subscribe(
            Dashboard::new(io::stdout(), config.server.base_url())
                .with_colors(io::stdout().is_terminal()),
        );
    }
    refresh.announce_types(&listing);

    let report = refresh.run_cycle().await;

    if let Some(e) = report.device.error().or(report.strips.error()) {
        eprintln!("❌ Snapshot incomplete: {}", e);
        error!(
            event = "cli.snapshot_failed",
            device_ok = !report.device.is_failed(),
            strips_ok = !report.strips.is_failed(),
            error = %e
        );
        return Err(format!("snapshot failed: {}", e).into());
    }

    if json_output {
        let response = SnapshotResponse {
            device: refresh.device(),
            strips: refresh.strips().iter().collect(),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    info!(
        event = "cli.snapshot_completed",
        strips = refresh.strips().len()
    );

    Ok(())
}
