//! Configuration types for leave policy.
//!
//! This module contains the strongly-typed policy structure that is
//! deserialized from a YAML policy file.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Upper bound for any per-grant day quantity in a policy.
pub const MAX_POLICY_DAYS: u32 = 366;

fn default_name() -> String {
    "Standard Annual Leave".to_string()
}

fn default_version() -> String {
    "default".to_string()
}

/// The annual leave policy applied by the calculator.
///
/// Every numeric constant of the accrual rules lives here so that a policy
/// file can describe it. [`LeavePolicy::default`] is the standard policy:
/// 15 base days, a 365-day tenure year, one extra day per two years of
/// service, a one-day bonus on the 3rd, 5th, 7th, ... anniversaries and
/// one day per month during the first year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Human-readable name of the policy.
    #[serde(default = "default_name")]
    pub name: String,
    /// Version or effective date label.
    #[serde(default = "default_version")]
    pub version: String,
    /// Days granted per year once the first year of service is complete.
    pub base_days: u32,
    /// Length of a tenure year in days. Leap years are not considered.
    pub tenure_year_days: u32,
    /// Full years of service per additional stepped day.
    pub step_interval_years: u32,
    /// The first anniversary that earns a bonus day.
    pub bonus_first_anniversary: u32,
    /// Anniversaries between successive bonus days.
    pub bonus_interval_years: u32,
    /// Days credited on each bonus anniversary.
    pub bonus_days: u32,
    /// Days credited per month during the first year of service.
    pub monthly_accrual_days: u32,
    /// Optional ceiling on the days granted in one year.
    #[serde(default)]
    pub max_annual_days: Option<u32>,
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: default_version(),
            base_days: 15,
            tenure_year_days: 365,
            step_interval_years: 2,
            bonus_first_anniversary: 3,
            bonus_interval_years: 2,
            bonus_days: 1,
            monthly_accrual_days: 1,
            max_annual_days: None,
        }
    }
}

impl LeavePolicy {
    /// Checks that the policy values can drive the calculator.
    ///
    /// Divisors and loop intervals must be non-zero, day quantities cannot
    /// exceed [`MAX_POLICY_DAYS`], and a configured cap cannot sit below the
    /// base grant.
    pub fn validate(&self) -> EngineResult<()> {
        let non_zero = [
            ("tenure_year_days", self.tenure_year_days),
            ("step_interval_years", self.step_interval_years),
            ("bonus_first_anniversary", self.bonus_first_anniversary),
            ("bonus_interval_years", self.bonus_interval_years),
        ];
        for (field, value) in non_zero {
            if value == 0 {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: "must be greater than zero".to_string(),
                });
            }
        }

        let bounded = [
            ("base_days", self.base_days),
            ("bonus_days", self.bonus_days),
            ("monthly_accrual_days", self.monthly_accrual_days),
            ("max_annual_days", self.max_annual_days.unwrap_or(0)),
        ];
        for (field, value) in bounded {
            if value > MAX_POLICY_DAYS {
                return Err(EngineError::InvalidPolicy {
                    field: field.to_string(),
                    message: format!("{} exceeds the maximum of {} days", value, MAX_POLICY_DAYS),
                });
            }
        }

        match self.max_annual_days {
            Some(cap) if cap < self.base_days => Err(EngineError::InvalidPolicy {
                field: "max_annual_days".to_string(),
                message: format!("cap {} is below base_days {}", cap, self.base_days),
            }),
            _ => Ok(()),
        }
    }

    /// Applies the optional annual ceiling to a day count.
    pub fn cap(&self, days: u32) -> u32 {
        match self.max_annual_days {
            Some(max) => days.min(max),
            None => days,
        }
    }
}
