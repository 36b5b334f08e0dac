//! Annual entitlement calculation.

use chrono::NaiveDate;

use crate::config::LeavePolicy;

use super::assessment::assess_year;

/// Computes the leave days granted to an employee for `target_year`, as of
/// `evaluation_date`.
///
/// Employees with less than one tenure year at January 1 accrue one day per
/// month until their first anniversary, replaced by a prorated lump sum
/// once that anniversary falls inside the year and has been reached.
/// Established employees receive the stepped base on January 1 plus
/// anniversary bonus days.
///
/// Only grants dated on or before `evaluation_date` are counted. Years
/// before the hire year, and years outside the representable date range,
/// yield 0.
///
/// # Arguments
///
/// * `hire_date` - The employee's first day of service
/// * `target_year` - The calendar year to compute
/// * `evaluation_date` - The "as of" date; later grants are not counted
/// * `policy` - The leave policy to apply
///
/// # Examples
///
/// ```
/// use leave_engine::calculation::compute_annual_entitlement;
/// use leave_engine::config::LeavePolicy;
/// use chrono::NaiveDate;
///
/// let policy = LeavePolicy::default();
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
/// let eval = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
///
/// // 3 full years: 15 + 1 stepped day, plus the 3rd-anniversary bonus
/// assert_eq!(compute_annual_entitlement(hire, 2024, eval, &policy), 17);
/// ```
pub fn compute_annual_entitlement(
    hire_date: NaiveDate,
    target_year: i32,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> u32 {
    assess_year(hire_date, target_year, evaluation_date, policy)
        .map_or(0, |assessment| assessment.total_days())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entitlement(hire: NaiveDate, year: i32, eval: NaiveDate) -> u32 {
        compute_annual_entitlement(hire, year, eval, &LeavePolicy::default())
    }

    // ==========================================================================
    // Monthly accrual (first tenure year)
    // ==========================================================================

    /// Hired mid-March: April through December grants
    #[test]
    fn test_first_year_monthly_grants_to_year_end() {
        assert_eq!(entitlement(date(2024, 3, 15), 2024, date(2024, 12, 31)), 9);
    }

    #[test]
    fn test_first_year_counts_only_grants_reached() {
        assert_eq!(entitlement(date(2024, 3, 15), 2024, date(2024, 6, 14)), 2);
        assert_eq!(entitlement(date(2024, 3, 15), 2024, date(2024, 6, 15)), 3);
    }

    #[test]
    fn test_hired_mid_year_grants_start_following_month() {
        assert_eq!(entitlement(date(2023, 7, 1), 2023, date(2023, 12, 31)), 5);
    }

    #[test]
    fn test_second_calendar_year_monthly_before_anniversary() {
        // 2024-01-01 .. 2024-06-01 accrued; anniversary 2024-07-01 not reached
        assert_eq!(entitlement(date(2023, 7, 1), 2024, date(2024, 6, 15)), 6);
    }

    #[test]
    fn test_lump_sum_replaces_monthly_count_at_anniversary() {
        // 184 days worked in 2023: ceil(184 / 365 * 15) = 8
        assert_eq!(entitlement(date(2023, 7, 1), 2024, date(2024, 7, 1)), 8);
        assert_eq!(entitlement(date(2023, 7, 1), 2024, date(2024, 12, 31)), 8);
    }

    #[test]
    fn test_hired_on_january_first_accrues_eleven_days() {
        assert_eq!(entitlement(date(2024, 1, 1), 2024, date(2024, 12, 31)), 11);
    }

    #[test]
    fn test_hired_on_december_thirty_first() {
        // Grants from 2025-01-31 .. 2025-11-30; anniversary 2025-12-31 in year
        // triggers the lump sum: ceil(1 / 365 * 15) = 1
        assert_eq!(entitlement(date(2024, 12, 31), 2025, date(2025, 12, 30)), 11);
        assert_eq!(entitlement(date(2024, 12, 31), 2025, date(2025, 12, 31)), 1);
    }

    // ==========================================================================
    // Annual grant (established employees)
    // ==========================================================================

    #[test]
    fn test_second_full_year_gets_base() {
        assert_eq!(entitlement(date(2022, 3, 1), 2024, date(2024, 12, 31)), 15);
    }

    #[test]
    fn test_three_full_years_with_prior_bonus() {
        assert_eq!(entitlement(date(2020, 1, 10), 2024, date(2024, 12, 31)), 17);
    }

    #[test]
    fn test_in_year_bonus_counts_after_anniversary() {
        // 3rd anniversary 2024-09-20; 2 full years at 2024-01-01
        let hire = date(2021, 9, 20);
        assert_eq!(entitlement(hire, 2024, date(2024, 9, 19)), 15);
        assert_eq!(entitlement(hire, 2024, date(2024, 9, 20)), 16);
    }

    #[test]
    fn test_base_not_granted_before_year_starts() {
        assert_eq!(entitlement(date(2020, 1, 10), 2025, date(2024, 12, 31)), 0);
    }

    #[test]
    fn test_first_anniversary_in_year_uses_larger_prorated_amount() {
        // 366 days worked through leap year 2024; first anniversary
        // 2025-01-01 falls inside 2025: ceil(366 / 365 * 15) = 16 > 15
        assert_eq!(entitlement(date(2024, 1, 1), 2025, date(2025, 12, 31)), 16);
        // One day later only 365 days were worked, so the stepped base wins
        assert_eq!(entitlement(date(2024, 1, 2), 2025, date(2025, 12, 31)), 15);
    }

    #[test]
    fn test_first_anniversary_on_january_first_keeps_stepped_base() {
        assert_eq!(entitlement(date(2023, 1, 1), 2024, date(2024, 12, 31)), 15);
    }

    #[test]
    fn test_cap_limits_long_tenure() {
        let policy = LeavePolicy {
            max_annual_days: Some(25),
            ..LeavePolicy::default()
        };
        let hire = date(1990, 5, 1);
        let eval = date(2024, 12, 31);
        assert!(compute_annual_entitlement(hire, 2024, eval, &LeavePolicy::default()) > 25);
        assert_eq!(compute_annual_entitlement(hire, 2024, eval, &policy), 25);
    }

    // ==========================================================================
    // Boundaries
    // ==========================================================================

    #[test]
    fn test_year_before_hire_is_zero() {
        assert_eq!(entitlement(date(2024, 3, 15), 2023, date(2030, 1, 1)), 0);
    }

    #[test]
    fn test_far_past_year_is_zero() {
        assert_eq!(entitlement(date(2024, 3, 15), 1900, date(2030, 1, 1)), 0);
    }

    #[test]
    fn test_unrepresentable_year_is_zero() {
        assert_eq!(entitlement(date(2024, 3, 15), i32::MAX, date(2030, 1, 1)), 0);
    }

    #[test]
    fn test_far_future_year_is_large() {
        let days = entitlement(date(2000, 1, 1), 2400, date(2400, 12, 31));
        assert!(days > 200, "expected a large entitlement, got {}", days);
    }
}
