//! Remaining balance and usage aggregation.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::config::LeavePolicy;
use crate::models::{LeaveBalance, LeaveUsage};

/// Computes the unused leave for `target_year` as of `evaluation_date`.
///
/// Returns `max(0, entitlement - used_days)`. `used_days` is supplied by
/// the caller; see [`total_used_days`] for aggregating usage records.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_remaining_balance;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
/// let eval = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let policy = LeavePolicy::default();
///
/// let remaining = compute_remaining_balance(hire, 2024, eval, Decimal::new(45, 1), &policy);
/// assert_eq!(remaining, Decimal::new(125, 1)); // 17 - 4.5
///
/// let overdrawn = compute_remaining_balance(hire, 2024, eval, Decimal::from(40), &policy);
/// assert_eq!(overdrawn, Decimal::ZERO);
/// ```
pub fn compute_remaining_balance(
    hire_date: NaiveDate,
    target_year: i32,
    evaluation_date: NaiveDate,
    used_days: Decimal,
    policy: &LeavePolicy,
) -> Decimal {
    let granted = super::compute_annual_entitlement(hire_date, target_year, evaluation_date, policy);
    remaining(granted, used_days)
}

/// Sums the days of approved usage records starting in `target_year`.
///
/// Pending, rejected and cancelled requests are ignored.
pub fn total_used_days(records: &[LeaveUsage], target_year: i32) -> Decimal {
    records
        .iter()
        .filter(|r| r.is_approved() && r.start_date.year() == target_year)
        .map(|r| r.days)
        .sum()
}

/// Builds the balance record persisted for one employee and year.
pub fn build_balance(
    employee_id: &str,
    hire_date: NaiveDate,
    target_year: i32,
    evaluation_date: NaiveDate,
    used_days: Decimal,
    policy: &LeavePolicy,
) -> LeaveBalance {
    let history = super::compute_grant_history(hire_date, target_year, evaluation_date, policy);
    let granted_days = history.granted_days();

    LeaveBalance {
        employee_id: employee_id.to_string(),
        year: target_year,
        evaluation_date,
        granted_days,
        used_days,
        remaining_days: remaining(granted_days, used_days),
        history,
    }
}

fn remaining(granted: u32, used_days: Decimal) -> Decimal {
    (Decimal::from(granted) - used_days).max(Decimal::ZERO)
}
