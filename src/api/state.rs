//! Application state for the Leave Accrual Engine API.

use std::sync::Arc;

use crate::config::{ConfigLoader, LeavePolicy};

/// Shared application state.
///
/// Holds the loaded leave policy, shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Shortcut for the loaded leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        self.config.policy()
    }
}
