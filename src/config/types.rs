//! Configuration types for the shift engine service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML service configuration file. Every section
//! has defaults, so an empty file is a valid configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::models::Commitment;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the service listens on.
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Availability checking settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AvailabilityConfig {
    /// Timeout applied around each commitment read, in milliseconds.
    pub store_timeout_ms: u64,
    /// Where a start-only window closes, as `HH:MM`. `24:00` means midnight.
    pub open_window_end: String,
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: 2000,
            open_window_end: "24:00".to_string(),
        }
    }
}

impl AvailabilityConfig {
    /// Returns the commitment read timeout.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Availability checking settings.
    pub availability: AvailabilityConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Commitments loaded into the in-memory store at startup.
    pub commitments: Vec<Commitment>,
}
