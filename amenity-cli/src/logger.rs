//! Logging setup
//!
//! Console only. Logs go to stderr so rendered output on stdout stays clean.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "amenity_cli=info,amenity_client=info,shared=warn";

/// Initialize the logging system
///
/// `RUST_LOG` takes precedence over `level`; `level` falls back to
/// [`DEFAULT_FILTER`] when empty.
pub fn init_logger(level: Option<&str>, json_format: bool) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_FILTER)))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    if json_format {
        registry
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()?;
    }
    Ok(())
}
