//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a leave
//! policy from a YAML file.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::LeavePolicy;

/// The policy file expected inside a configuration directory.
pub const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to leave policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// └── policy.yaml   # Leave accrual policy
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard").unwrap();
/// println!("Base days: {}", loader.policy().base_days);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: LeavePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `policy.yaml` is missing, contains invalid YAML,
    /// or describes a policy the calculator cannot apply.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use leave_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/standard")?;
    /// # Ok::<(), leave_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;
        policy.validate()?;

        debug!(
            path = %policy_path.display(),
            policy = %policy.name,
            version = %policy.version,
            "Loaded leave policy"
        );

        Ok(Self { policy })
    }

    /// Wraps an in-memory policy, validating it the same way as a loaded one.
    pub fn from_policy(policy: LeavePolicy) -> EngineResult<Self> {
        policy.validate()?;
        Ok(Self { policy })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            policy: LeavePolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "leave_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.policy().name, "Standard Annual Leave");
        assert_eq!(loader.policy().version, "2024-01-01");
    }

    #[test]
    fn test_shipped_policy_matches_default_rules() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let defaults = LeavePolicy::default();
        let loaded = loader.policy();

        assert_eq!(loaded.base_days, defaults.base_days);
        assert_eq!(loaded.tenure_year_days, defaults.tenure_year_days);
        assert_eq!(loaded.step_interval_years, defaults.step_interval_years);
        assert_eq!(loaded.bonus_first_anniversary, defaults.bonus_first_anniversary);
        assert_eq!(loaded.bonus_interval_years, defaults.bonus_interval_years);
        assert_eq!(loaded.bonus_days, defaults.bonus_days);
        assert_eq!(loaded.monthly_accrual_days, defaults.monthly_accrual_days);
        assert_eq!(loaded.max_annual_days, None);
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("policy.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_load_malformed_yaml_returns_parse_error() {
        let dir = scratch_dir("malformed");
        fs::write(dir.join(POLICY_FILE), "base_days: [not, a, number").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("policy.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_policy_returns_policy_error() {
        let dir = scratch_dir("invalid_policy");
        fs::write(
            dir.join(POLICY_FILE),
            "base_days: 15\ntenure_year_days: 0\nstep_interval_years: 2\n\
             bonus_first_anniversary: 3\nbonus_interval_years: 2\nbonus_days: 1\n\
             monthly_accrual_days: 1\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "tenure_year_days");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }
    }

    #[test]
    fn test_from_policy_validates() {
        let policy = LeavePolicy {
            step_interval_years: 0,
            ..LeavePolicy::default()
        };
        assert!(ConfigLoader::from_policy(policy).is_err());
        assert!(ConfigLoader::from_policy(LeavePolicy::default()).is_ok());
    }

    #[test]
    fn test_load_oversized_base_days_returns_policy_error() {
        let dir = scratch_dir("oversized");
        fs::write(
            dir.join(POLICY_FILE),
            "base_days: 3000000000\ntenure_year_days: 365\nstep_interval_years: 2\n\
             bonus_first_anniversary: 3\nbonus_interval_years: 2\nbonus_days: 1\n\
             monthly_accrual_days: 1\n",
        )
        .unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::InvalidPolicy { field, .. }) => {
                assert_eq!(field, "base_days");
            }
            other => panic!("Expected InvalidPolicy, got {:?}", other),
        }

        let policy = LeavePolicy {
            monthly_accrual_days: 500_000_000,
            ..LeavePolicy::default()
        };
        assert!(ConfigLoader::from_policy(policy).is_err());
    }
}
