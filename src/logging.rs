//! Logging initialization.
//!
//! Installs a `tracing_subscriber` fmt subscriber. `RUST_LOG` takes priority;
//! otherwise the configured filter applies.

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;
use crate::error::{EngineError, EngineResult};

/// Builds the filter from `RUST_LOG`, falling back to the configured directive.
pub fn build_filter(config: &LoggingConfig) -> EngineResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| EngineError::ConfigParseError {
            path: "logging.filter".to_string(),
            message: format!("invalid filter '{}': {}", config.filter, e),
        }),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Fails if the filter is invalid or a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> EngineResult<()> {
    let filter = build_filter(config)?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .try_init()
        .map_err(|e| EngineError::ConfigParseError {
            path: "logging".to_string(),
            message: e.to_string(),
        })
}

/// Installs a verbose subscriber that writes through the test harness.
///
/// Safe to call from many tests; only the first call takes effect.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_test_is_idempotent() {
        init_test();
        init_test();
        tracing::debug!("logging initialized twice without panicking");
    }

    #[test]
    fn test_configured_filter_is_accepted() {
        let config = LoggingConfig {
            filter: "shift_engine=debug,tower=warn".to_string(),
        };
        assert!(build_filter(&config).is_ok());
    }
}
