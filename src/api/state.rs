//! Application state for the shift engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::availability::{CommitmentStore, ConflictChecker};
use crate::config::ConfigLoader;

/// Shared application state.
///
/// Holds the loaded configuration and a conflict checker bound to the
/// commitment store. Cloning is cheap; both sit behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    checker: ConflictChecker<Arc<dyn CommitmentStore>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, store: Arc<dyn CommitmentStore>) -> Self {
        let checker =
            ConflictChecker::new(store).with_open_window_end(config.open_window_end_minutes());
        Self {
            config: Arc::new(config),
            checker,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the conflict checker.
    pub fn checker(&self) -> &ConflictChecker<Arc<dyn CommitmentStore>> {
        &self.checker
    }

    /// Returns the timeout applied around each commitment read.
    pub fn store_timeout(&self) -> Duration {
        self.config.store_timeout()
    }
}
