//! Grant/expiry history generation.

use chrono::NaiveDate;

use crate::config::LeavePolicy;
use crate::models::LeaveHistory;

use super::assessment::assess_year;

/// Produces the grant and expiry events of `target_year`, as of
/// `evaluation_date`.
///
/// Events are confined to the target year, never dated after
/// `evaluation_date`, and sorted ascending by date with grants ahead of
/// expiries on the same day. The granted days always sum to
/// [`compute_annual_entitlement`](super::compute_annual_entitlement) for the
/// same inputs.
///
/// Expiry rules:
/// - First tenure year, monthly grants: the accrued monthly days lapse on
///   the day before the first anniversary, when that day is in the year.
/// - First tenure year, lump sum: the lump sum lapses on December 31.
/// - Established employees: everything granted in the year lapses on
///   December 31. Nothing carries over.
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_grant_history;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::LeaveEvent;
/// use chrono::NaiveDate;
///
/// let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
/// let history = compute_grant_history(d(2020, 1, 10), 2024, d(2024, 12, 31), &LeavePolicy::default());
///
/// assert_eq!(
///     history.events,
///     vec![
///         LeaveEvent::grant(d(2024, 1, 1), 17),
///         LeaveEvent::expiry(d(2024, 12, 31), 17),
///     ]
/// );
/// ```
pub fn compute_grant_history(
    hire_date: NaiveDate,
    target_year: i32,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> LeaveHistory {
    assess_year(hire_date, target_year, evaluation_date, policy)
        .map(|assessment| assessment.history)
        .unwrap_or_else(|| LeaveHistory {
            year: target_year,
            events: Vec::new(),
        })
}
