//! Tracing subscriber setup
//!
//! Installs a global `tracing-subscriber` fmt subscriber. `RUST_LOG` takes
//! precedence over the configured level; output is either human-readable or
//! JSON lines.

use eventstatus_domain::{EventStatusError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Build the env filter for `level`, preferring `RUST_LOG` when it is set and
/// valid.
///
/// # Errors
/// Returns `EventStatusError::Config` if `level` is not a valid filter
/// directive and `RUST_LOG` does not supply one.
pub fn build_env_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| parse_filter(level))
}

fn parse_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level)
        .map_err(|e| EventStatusError::Config(format!("Invalid log level '{level}': {e}")))
}

/// Install the global subscriber.
///
/// Returns `Ok(true)` if this call installed it and `Ok(false)` if a global
/// subscriber was already set.
///
/// # Errors
/// Returns `EventStatusError::Config` for an invalid log level.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_env_filter(&config.level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed =
        if config.json { builder.json().try_init() } else { builder.try_init() }.is_ok();

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "tracing initialised");
    }
    Ok(installed)
}
