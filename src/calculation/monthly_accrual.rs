//! First-year monthly accrual dates.

use chrono::{Months, NaiveDate};

/// Dates on which first-year monthly grants are credited.
///
/// One grant per month on the hire day-of-month, starting one month after
/// hire and stopping before `stop` (the first anniversary). Each date is
/// computed from the hire date directly, so a hire on the 31st lands on
/// the last day of shorter months without drifting afterwards.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::monthly_accrual_dates;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let stop = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
/// let dates: Vec<_> = monthly_accrual_dates(hire, stop).collect();
///
/// assert_eq!(dates.len(), 11);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// assert_eq!(dates[1], NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// ```
pub fn monthly_accrual_dates(
    hire_date: NaiveDate,
    stop: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    (1..=12)
        .map_while(move |month| hire_date.checked_add_months(Months::new(month)))
        .take_while(move |date| *date < stop)
}
