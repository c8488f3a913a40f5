//! Logging setup.
//!
//! Events are written to stderr so they never mix with the path printed on stdout.

use std::io;

use color_eyre::eyre::Result;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Environment variable holding a filter that overrides the verbosity flag.
pub const LOG_ENV: &str = "MAZETRAIL_LOG";

/// Installs the global tracing subscriber.
///
/// The filter is read from [`LOG_ENV`] when set; otherwise `verbosity` picks the level for this
/// crate's events.
///
/// # Errors
///
/// This function may return errors if the filter cannot be parsed or a global subscriber has
/// already been installed.
pub fn install_subscriber(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_ansi(true),
        )
        .try_init()?;

    Ok(())
}

/// Maps the number of `--verbose` flags to a filter directive.
const fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "mazetrail=warn",
        1 => "mazetrail=info",
        2 => "mazetrail=debug",
        _ => "mazetrail=trace",
    }
}
