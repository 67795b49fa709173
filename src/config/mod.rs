//! Configuration loading for the shift engine service.
//!
//! This module loads the service configuration from a YAML file: server bind
//! address, the commitment-read timeout, the open-window policy, the default
//! log filter and optional seed commitments.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Read timeout: {:?}", loader.store_timeout());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AvailabilityConfig, LoggingConfig, ServerConfig, ServiceConfig};
