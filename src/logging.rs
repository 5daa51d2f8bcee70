//! Diagnostic logging.
//!
//! User-facing narration goes through [crate::ui]. This sets up `tracing`
//! for internal detail (commands run, files read), written to stderr and
//! silent unless `BUMP_VERSION_LOG` asks for it, e.g.
//! `BUMP_VERSION_LOG=debug bump-version --dryrun "release"`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "BUMP_VERSION_LOG";

/// Filter used when `BUMP_VERSION_LOG` is unset or invalid
pub const DEFAULT_FILTER: &str = "warn";

/// Build the filter from `BUMP_VERSION_LOG`, falling back to [DEFAULT_FILTER]
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging() {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    // Fails only when a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(console_layer)
        .try_init();
}
