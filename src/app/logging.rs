use tracing_subscriber::EnvFilter;

use super::reporter::Verbosity;

/// Install the stderr diagnostics subscriber. `RUST_LOG` overrides the verbosity default.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
