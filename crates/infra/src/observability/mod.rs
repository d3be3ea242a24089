//! Logging initialisation
//!
//! Installs a `tracing-subscriber` fmt subscriber filtered by `RUST_LOG`
//! (default `info`). Output goes to stderr so command output on stdout stays
//! machine-readable.

use duosync_domain::{DuoSyncError, Result};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

duosync_domain::impl_label_conversions!(LogFormat {
    Text => "text",
    Json => "json",
});

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = env_filter();
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Text => builder.with_target(false).try_init(),
        LogFormat::Json => builder.json().with_current_span(true).try_init(),
    };

    installed.map_err(|err| DuoSyncError::Internal(format!("failed to install tracing subscriber: {err}")))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
