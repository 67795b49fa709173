//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{EngineError, EngineResult};
use crate::models::{MINUTES_PER_DAY, minutes_of_day, parse_clock_time};

use super::types::ServiceConfig;

/// Loads and provides access to the service configuration.
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Listening on {}", loader.config().server.bind_address);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ServiceConfig,
    open_window_end: u32,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file does not exist or cannot be read
    /// - The file contains invalid YAML
    /// - A value fails validation (zero timeout, malformed `open_window_end`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::from_yaml_str("availability:\n  open_window_end: \"18:00\"\n", "inline").unwrap();
    /// assert_eq!(loader.open_window_end_minutes(), 1080);
    /// ```
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<Self> {
        let parse_error = |message: String| EngineError::ConfigParseError {
            path: origin.to_string(),
            message,
        };

        // An empty document deserializes to unit, not a mapping.
        let config: ServiceConfig = if content.trim().is_empty() {
            ServiceConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?
        };

        if config.availability.store_timeout_ms == 0 {
            return Err(parse_error(
                "availability.store_timeout_ms must be greater than zero".to_string(),
            ));
        }

        let open_window_end = parse_window_end(&config.availability.open_window_end)
            .map_err(|e| parse_error(format!("availability.open_window_end: {}", e)))?;

        Ok(Self {
            config,
            open_window_end,
        })
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Returns where start-only windows close, in minutes since midnight.
    pub fn open_window_end_minutes(&self) -> u32 {
        self.open_window_end
    }

    /// Returns the commitment read timeout.
    pub fn store_timeout(&self) -> Duration {
        self.config.availability.store_timeout()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            config: ServiceConfig::default(),
            open_window_end: MINUTES_PER_DAY,
        }
    }
}

fn parse_window_end(raw: &str) -> EngineResult<u32> {
    if raw.trim() == "24:00" {
        return Ok(MINUTES_PER_DAY);
    }
    parse_clock_time("open_window_end", raw).map(minutes_of_day)
}
