use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted.
/// Events go to stderr as JSON lines so stdout stays free for the dashboard.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::from_default_env()
        .add_directive(log_directive(quiet, "beetle"))
        .add_directive(log_directive(quiet, "beetle_core"));

    // try_init: a second call (tests, embedders) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

fn log_directive(quiet: bool, target: &str) -> tracing_subscriber::filter::Directive {
    let level = if quiet { "error" } else { "info" };
    format!("{target}={level}")
        .parse()
        .unwrap_or_else(|_| tracing_subscriber::filter::LevelFilter::ERROR.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directive_levels() {
        assert_eq!(log_directive(true, "beetle").to_string(), "beetle=error");
        assert_eq!(log_directive(false, "beetle_core").to_string(), "beetle_core=info");
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(true);
        init_logging(false);
    }
}
