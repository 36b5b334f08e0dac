//! Tenure classification and the shared sub-calculations.
//!
//! Both the entitlement total and the history generator classify a year
//! through [`classify_tenure_regime`] and use the helpers here for the
//! stepped base and the prorated lump sum. Tenure fractions always use the
//! policy's fixed year length (365 days by default), never calendar-aware
//! year lengths.

use chrono::{Datelike, Months, NaiveDate};

use crate::config::LeavePolicy;
use crate::models::TenureRegime;

/// The first and last day of a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    /// The calendar year.
    pub year: i32,
    /// January 1.
    pub start: NaiveDate,
    /// December 31.
    pub end: NaiveDate,
}

impl YearWindow {
    /// Returns the window for `year`, or `None` when the year lies outside
    /// the representable date range.
    pub fn for_year(year: i32) -> Option<Self> {
        Some(Self {
            year,
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }

    /// Returns true if `date` falls inside the year.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year
    }
}

/// Signed number of days from the hire date to `year_start`.
///
/// Negative when the employee is hired after `year_start`.
pub fn tenure_days(hire_date: NaiveDate, year_start: NaiveDate) -> i64 {
    year_start.signed_duration_since(hire_date).num_days()
}

/// Selects the accrual regime for the year starting at `year_start`.
///
/// Monthly accrual applies while `tenure_days / tenure_year_days < 1`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::classify_tenure_regime;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::TenureRegime;
/// use chrono::NaiveDate;
///
/// let policy = LeavePolicy::default();
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
/// let year_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(
///     classify_tenure_regime(hire, year_start, &policy),
///     TenureRegime::AnnualGrant
/// );
/// ```
pub fn classify_tenure_regime(
    hire_date: NaiveDate,
    year_start: NaiveDate,
    policy: &LeavePolicy,
) -> TenureRegime {
    if tenure_days(hire_date, year_start) < i64::from(policy.tenure_year_days) {
        TenureRegime::MonthlyAccrual
    } else {
        TenureRegime::AnnualGrant
    }
}

/// Whole tenure years at `year_start`, floored (negative for future hires).
pub fn full_years_of_tenure(
    hire_date: NaiveDate,
    year_start: NaiveDate,
    policy: &LeavePolicy,
) -> i64 {
    tenure_days(hire_date, year_start).div_euclid(i64::from(policy.tenure_year_days))
}

/// Inclusive day count from the hire date through December 31 of the year
/// before `year_start`; zero when the hire date is later.
pub fn days_worked_through_prior_year_end(hire_date: NaiveDate, year_start: NaiveDate) -> i64 {
    // Dec 31 - hire + 1 == Jan 1 - hire
    tenure_days(hire_date, year_start).max(0)
}

/// `ceil(days_worked / tenure_year_days * base_days)`, in exact integer
/// arithmetic.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::prorated_lump_sum;
/// use leave_engine::config::LeavePolicy;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(prorated_lump_sum(184, &policy), 8); // 7.56 rounds up
/// assert_eq!(prorated_lump_sum(73, &policy), 3); // exactly 3
/// assert_eq!(prorated_lump_sum(365, &policy), 15);
/// ```
pub fn prorated_lump_sum(days_worked: i64, policy: &LeavePolicy) -> u32 {
    let year = i64::from(policy.tenure_year_days);
    let scaled = days_worked.max(0) * i64::from(policy.base_days);
    saturate((scaled + year - 1) / year)
}

/// The stepped annual base: `base_days` plus one day per
/// `step_interval_years` of service beyond the first year.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::stepped_base_days;
/// use leave_engine::config::LeavePolicy;
///
/// let policy = LeavePolicy::default();
/// assert_eq!(stepped_base_days(1, &policy), 15);
/// assert_eq!(stepped_base_days(2, &policy), 15);
/// assert_eq!(stepped_base_days(3, &policy), 16);
/// assert_eq!(stepped_base_days(5, &policy), 17);
/// ```
pub fn stepped_base_days(full_years: i64, policy: &LeavePolicy) -> u32 {
    let steps = if full_years >= 2 {
        (full_years - 1) / i64::from(policy.step_interval_years)
    } else {
        0
    };
    policy.base_days.saturating_add(saturate(steps))
}

/// The `years`-th anniversary of the hire date.
///
/// Uses calendar months, so a 29 February hire date lands on 28 February
/// in non-leap years.
pub fn anniversary(hire_date: NaiveDate, years: u32) -> Option<NaiveDate> {
    hire_date.checked_add_months(Months::new(years.checked_mul(12)?))
}

/// The date monthly accrual stops and the first-year lump sum may apply.
pub fn first_anniversary(hire_date: NaiveDate) -> Option<NaiveDate> {
    anniversary(hire_date, 1)
}

fn saturate(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
