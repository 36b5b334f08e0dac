//! Configuration loading for the Leave Accrual Engine.
//!
//! This module loads the leave policy (base days, tenure steps, anniversary
//! bonuses, monthly accrual) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, POLICY_FILE};
pub use types::{LeavePolicy, MAX_POLICY_DAYS};
