//! Tracing subscriber initialisation

use crate::config::LoggingConfig;
use crate::{Error, Result};

/// Install the global tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Fails if the level
/// is not a valid filter directive or a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(&config.level)
            .map_err(|e| Error::Config(format!("Invalid log level '{}': {}", config.level, e)))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to initialise logging: {}", e)))
}
