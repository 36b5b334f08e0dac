//! Calculation result models for the Leave Accrual Engine.
//!
//! This module contains the entitlement breakdown, the balance record that
//! callers persist, and the audit structures that explain each decision.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LeaveHistory;

/// The accrual regime applied to a target year.
///
/// Selected by whether the employee had a full tenure year at the start
/// of the target year.
///
/// # Example
///
/// ```
/// use leave_engine::models::TenureRegime;
///
/// assert_eq!(
///     serde_json::to_string(&TenureRegime::MonthlyAccrual).unwrap(),
///     "\"monthly_accrual\""
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureRegime {
    /// Less than one tenure year at the start of the target year: one day
    /// per month until the first anniversary.
    MonthlyAccrual,
    /// At least one tenure year: a stepped annual grant on January 1 plus
    /// anniversary bonus days.
    AnnualGrant,
}

impl std::fmt::Display for TenureRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TenureRegime::MonthlyAccrual => write!(f, "monthly_accrual"),
            TenureRegime::AnnualGrant => write!(f, "annual_grant"),
        }
    }
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// How a year's entitlement was assembled.
///
/// Produced by [`crate::calculation::explain_entitlement`]. `total_days`
/// always equals the history's granted days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementBreakdown {
    /// The regime applied to the year.
    pub regime: TenureRegime,
    /// Days from hire date to January 1 of the target year (negative for
    /// later hires).
    pub tenure_days: i64,
    /// Whole tenure years at January 1, using the policy's year length.
    pub full_years: i64,
    /// Days accrued through monthly grants counted for the year.
    pub monthly_days: u32,
    /// The stepped annual base (annual grant regime only).
    pub stepped_base_days: u32,
    /// The prorated lump sum, when that rule applied.
    pub prorated_days: Option<u32>,
    /// Bonus days from anniversaries before the year, folded into the base.
    pub prior_bonus_days: u32,
    /// Bonus days from anniversaries inside the year.
    pub in_year_bonus_days: u32,
    /// Total days granted for the year as of the evaluation date.
    pub total_days: u32,
    /// The grant/expiry events behind the total.
    pub history: LeaveHistory,
    /// The decisions taken, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// The computed balance for one employee and year.
///
/// This is the record the external batch job upserts into storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The target year.
    pub year: i32,
    /// The evaluation date the balance was computed as of.
    pub evaluation_date: NaiveDate,
    /// Days granted for the year.
    pub granted_days: u32,
    /// Approved days used in the year.
    pub used_days: Decimal,
    /// `max(0, granted - used)`.
    pub remaining_days: Decimal,
    /// The grant/expiry events for the year.
    pub history: LeaveHistory,
}
