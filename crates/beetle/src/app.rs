use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("beetle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Live terminal dashboard for light strip device servers")
        .long_about("beetle polls a device server's device-state and light strip collections, backs off exponentially while the server is unreachable, and renders the current colors, tick counter, spectrum and graph data in the terminal.")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("watch")
                .about("Poll the server and keep the dashboard up to date until Ctrl-C")
                .arg(url_arg())
                .arg(timeout_arg())
                .arg(
                    Arg::new("initial-backoff")
                        .long("initial-backoff")
                        .help("Delay between cycles in milliseconds before any failure (overrides config)")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("max-backoff")
                        .long("max-backoff")
                        .help("Upper bound for the delay between cycles in milliseconds (overrides config)")
                        .value_parser(value_parser!(u64).range(1..))
                )
                .arg(
                    Arg::new("reset-on-success")
                        .long("reset-on-success")
                        .help("Return to the initial delay after a fully successful cycle")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("snapshot")
                .about("Run one refresh cycle, print the result and exit")
                .arg(url_arg())
                .arg(timeout_arg())
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output both record sets in JSON format")
                        .action(ArgAction::SetTrue)
                )
        )
}

fn url_arg() -> Arg {
    Arg::new("url")
        .long("url")
        .short('u')
        .help("Base URL of the device server (overrides config)")
}

fn timeout_arg() -> Arg {
    Arg::new("timeout")
        .long("timeout")
        .help("Per-request timeout in milliseconds (overrides config)")
        .value_parser(value_parser!(u64).range(1..))
}
