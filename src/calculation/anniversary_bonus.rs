//! Anniversary bonus days.
//!
//! Established employees earn extra days on the 3rd, 5th, 7th, ...
//! hire-date anniversaries. Anniversaries before the target year are folded
//! into the January 1 grant; anniversaries inside the year are granted on
//! the day once the evaluation date reaches them.

use chrono::NaiveDate;

use crate::config::LeavePolicy;

use super::tenure::{YearWindow, anniversary};

/// Bonus anniversaries relative to one target year.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BonusSplit {
    /// Bonus anniversaries dated before January 1.
    pub prior_count: u32,
    /// Bonus anniversaries inside the year, on or before the evaluation
    /// date, ascending.
    pub in_year: Vec<NaiveDate>,
}

/// All bonus anniversary dates up to and including `until`.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::bonus_anniversaries;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2015, 6, 1).unwrap();
/// let until = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let dates: Vec<_> = bonus_anniversaries(hire, until, &LeavePolicy::default()).collect();
///
/// // 3rd, 5th, 7th and 9th anniversaries
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2018, 6, 1).unwrap());
/// ```
pub fn bonus_anniversaries(
    hire_date: NaiveDate,
    until: NaiveDate,
    policy: &LeavePolicy,
) -> impl Iterator<Item = NaiveDate> {
    let interval = policy.bonus_interval_years;
    std::iter::successors(Some(policy.bonus_first_anniversary), move |n| {
        n.checked_add(interval)
    })
    .map_while(move |n| anniversary(hire_date, n))
    .take_while(move |date| *date <= until)
}

/// Splits bonus anniversaries into those folded into the base and those
/// granted during the year.
pub fn split_bonus_anniversaries(
    hire_date: NaiveDate,
    window: &YearWindow,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> BonusSplit {
    let mut split = BonusSplit::default();
    for date in bonus_anniversaries(hire_date, window.end, policy) {
        if date < window.start {
            split.prior_count += 1;
        } else if date <= evaluation_date {
            split.in_year.push(date);
        }
    }
    split
}
