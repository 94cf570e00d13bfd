//! Global `tracing` subscriber setup.
//!
//! The filter comes from `NEBULA_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `info`.

use std::sync::OnceLock;

use tracing_subscriber::EnvFilter;

use crate::error::{config_error, MenuResult};

pub const LOG_ENV_VAR: &str = "NEBULA_LOG";
const DEFAULT_DIRECTIVE: &str = "info";

/// Set once a subscriber has actually been installed.
static GLOBAL_LOGGER: OnceLock<()> = OnceLock::new();

/// Builds the filter from the environment, falling back to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the stderr subscriber. Errors if called twice.
pub fn init_global_logger() -> MenuResult<()> {
    if GLOBAL_LOGGER.get().is_some() {
        return Err(config_error("logger already initialized"));
    }

    let filter = env_filter();
    let directive = filter.to_string();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| config_error(format!("failed to install logger: {e}")))?;
    let _ = GLOBAL_LOGGER.set(());

    tracing::debug!(filter = %directive, "logger initialized");
    Ok(())
}
