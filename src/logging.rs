//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output on stdout.
//! The filter is read from `XTS_LOG` (e.g. `XTS_LOG=debug`) and defaults
//! to `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "XTS_LOG";

const DEFAULT_FILTER: &str = "warn";

pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
