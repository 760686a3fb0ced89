use std::io;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "PATTERNS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs the global fmt subscriber.
///
/// Logs go to stderr so example transcripts on stdout stay clean. Calling
/// this more than once is harmless; later calls leave the first subscriber
/// in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .try_init();
}
