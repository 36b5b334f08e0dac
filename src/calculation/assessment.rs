//! Year assessment shared by the entitlement, history and audit functions.
//!
//! A single pass classifies the year and produces every grant and expiry
//! event. The entitlement total is the sum of the grants, so the scalar
//! result and the event list cannot drift apart.

use chrono::NaiveDate;
use tracing::debug;

use crate::config::LeavePolicy;
use crate::models::{LeaveEvent, LeaveHistory, TenureRegime};

use super::anniversary_bonus::split_bonus_anniversaries;
use super::monthly_accrual::monthly_accrual_dates;
use super::tenure::{
    YearWindow, classify_tenure_regime, days_worked_through_prior_year_end, first_anniversary,
    full_years_of_tenure, prorated_lump_sum, stepped_base_days, tenure_days,
};

/// Everything decided while assessing one employee-year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct YearAssessment {
    pub window: YearWindow,
    pub regime: TenureRegime,
    pub tenure_days: i64,
    pub full_years: i64,
    /// Days from monthly grants counted in the year.
    pub monthly_days: u32,
    /// Stepped base; zero under monthly accrual.
    pub stepped_base_days: u32,
    /// Prorated lump sum when the first-anniversary rule applied.
    pub prorated_days: Option<u32>,
    pub prior_bonus_days: u32,
    pub in_year_bonus_days: u32,
    pub history: LeaveHistory,
}

impl YearAssessment {
    /// Days granted in the year as of the evaluation date.
    pub fn total_days(&self) -> u32 {
        self.history.granted_days()
    }
}

/// Assesses `target_year` for an employee hired on `hire_date`.
///
/// Returns `None` only when the year lies outside the representable date
/// range.
pub(crate) fn assess_year(
    hire_date: NaiveDate,
    target_year: i32,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> Option<YearAssessment> {
    let window = YearWindow::for_year(target_year)?;
    let regime = classify_tenure_regime(hire_date, window.start, policy);

    let mut assessment = YearAssessment {
        window,
        regime,
        tenure_days: tenure_days(hire_date, window.start),
        full_years: full_years_of_tenure(hire_date, window.start, policy),
        monthly_days: 0,
        stepped_base_days: 0,
        prorated_days: None,
        prior_bonus_days: 0,
        in_year_bonus_days: 0,
        history: LeaveHistory {
            year: target_year,
            events: Vec::new(),
        },
    };

    match regime {
        TenureRegime::MonthlyAccrual => {
            assess_monthly_accrual(&mut assessment, hire_date, evaluation_date, policy)
        }
        TenureRegime::AnnualGrant => {
            assess_annual_grant(&mut assessment, hire_date, evaluation_date, policy)
        }
    }

    assessment
        .history
        .events
        .sort_by(|a, b| a.date.cmp(&b.date).then(a.kind.cmp(&b.kind)));

    debug!(
        %hire_date,
        target_year,
        %evaluation_date,
        regime = %assessment.regime,
        tenure_days = assessment.tenure_days,
        total_days = assessment.total_days(),
        events = assessment.history.events.len(),
        "Assessed leave year"
    );

    Some(assessment)
}

/// First tenure year: monthly grants, or the prorated lump sum once the
/// first anniversary inside the year has been reached.
fn assess_monthly_accrual(
    assessment: &mut YearAssessment,
    hire_date: NaiveDate,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) {
    let window = assessment.window;
    let anniversary = first_anniversary(hire_date).unwrap_or(NaiveDate::MAX);
    let events = &mut assessment.history.events;

    if window.contains(anniversary) && anniversary <= evaluation_date {
        let worked = days_worked_through_prior_year_end(hire_date, window.start);
        let lump = policy.cap(prorated_lump_sum(worked, policy));
        assessment.prorated_days = Some(lump);

        if lump > 0 {
            events.push(LeaveEvent::grant(anniversary, lump));
            if window.end <= evaluation_date {
                events.push(LeaveEvent::expiry(window.end, lump));
            }
        }
        return;
    }

    let accrued: Vec<NaiveDate> = monthly_accrual_dates(hire_date, anniversary).collect();
    for &date in accrued
        .iter()
        .filter(|d| window.contains(**d) && **d <= evaluation_date)
    {
        events.push(LeaveEvent::grant(date, policy.monthly_accrual_days));
        assessment.monthly_days = assessment
            .monthly_days
            .saturating_add(policy.monthly_accrual_days);
    }

    // Monthly days lapse the day before the first anniversary.
    if let Some(day_before) = anniversary.pred_opt() {
        if window.contains(day_before) && day_before <= evaluation_date {
            let lapsed_grants = accrued.iter().filter(|d| **d <= day_before).count();
            let lapsed = u32::try_from(lapsed_grants)
                .unwrap_or(u32::MAX)
                .saturating_mul(policy.monthly_accrual_days);
            if lapsed > 0 {
                events.push(LeaveEvent::expiry(day_before, lapsed));
            }
        }
    }
}

/// Established employees: one January 1 grant, in-year bonus grants, and a
/// year-end expiry of everything granted.
fn assess_annual_grant(
    assessment: &mut YearAssessment,
    hire_date: NaiveDate,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) {
    let window = assessment.window;
    let stepped = stepped_base_days(assessment.full_years, policy);
    assessment.stepped_base_days = stepped;

    // First anniversary falling inside the year: use the better of the
    // stepped base and the prorated lump sum.
    let prorated = first_anniversary(hire_date)
        .filter(|a| window.contains(*a))
        .map(|_| {
            prorated_lump_sum(
                days_worked_through_prior_year_end(hire_date, window.start),
                policy,
            )
        });
    assessment.prorated_days = prorated;
    let base = stepped.max(prorated.unwrap_or(0));

    let bonuses = split_bonus_anniversaries(hire_date, &window, evaluation_date, policy);
    assessment.prior_bonus_days = bonuses.prior_count.saturating_mul(policy.bonus_days);

    if window.start > evaluation_date {
        return;
    }

    let events = &mut assessment.history.events;
    let mut granted = policy.cap(base.saturating_add(assessment.prior_bonus_days));
    if granted > 0 {
        events.push(LeaveEvent::grant(window.start, granted));
    }

    for date in bonuses.in_year {
        let credited = policy.cap(granted.saturating_add(policy.bonus_days)) - granted;
        if credited > 0 {
            events.push(LeaveEvent::grant(date, credited));
            granted += credited;
            assessment.in_year_bonus_days += credited;
        }
    }

    if window.end <= evaluation_date && granted > 0 {
        events.push(LeaveEvent::expiry(window.end, granted));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assess(hire: NaiveDate, year: i32, eval: NaiveDate) -> YearAssessment {
        assess_year(hire, year, eval, &LeavePolicy::default()).unwrap()
    }

    #[test]
    fn test_unrepresentable_year_yields_none() {
        let result = assess_year(date(2020, 1, 1), i32::MAX, date(2024, 1, 1), &LeavePolicy::default());
        assert!(result.is_none());
    }

    #[test]
    fn test_monthly_accrual_records_monthly_days() {
        let assessment = assess(date(2024, 3, 15), 2024, date(2024, 12, 31));

        assert_eq!(assessment.regime, TenureRegime::MonthlyAccrual);
        assert_eq!(assessment.monthly_days, 9);
        assert_eq!(assessment.prorated_days, None);
        assert_eq!(assessment.stepped_base_days, 0);
        assert_eq!(assessment.total_days(), 9);
    }

    #[test]
    fn test_lump_sum_replaces_monthly_series() {
        let assessment = assess(date(2023, 7, 1), 2024, date(2024, 12, 31));

        assert_eq!(assessment.regime, TenureRegime::MonthlyAccrual);
        assert_eq!(assessment.monthly_days, 0);
        assert_eq!(assessment.prorated_days, Some(8));
        assert_eq!(
            assessment.history.events,
            vec![
                LeaveEvent::grant(date(2024, 7, 1), 8),
                LeaveEvent::expiry(date(2024, 12, 31), 8),
            ]
        );
    }

    #[test]
    fn test_annual_grant_records_components() {
        let assessment = assess(date(2020, 1, 10), 2024, date(2024, 12, 31));

        assert_eq!(assessment.regime, TenureRegime::AnnualGrant);
        assert_eq!(assessment.full_years, 3);
        assert_eq!(assessment.stepped_base_days, 16);
        assert_eq!(assessment.prior_bonus_days, 1);
        assert_eq!(assessment.in_year_bonus_days, 0);
        assert_eq!(assessment.total_days(), 17);
    }

    #[test]
    fn test_same_day_grant_sorts_before_expiry() {
        // 3rd anniversary lands on Dec 31, the expiry date
        let assessment = assess(date(2021, 12, 31), 2024, date(2024, 12, 31));
        let events = &assessment.history.events;
        let last_two = &events[events.len() - 2..];

        assert_eq!(last_two[0], LeaveEvent::grant(date(2024, 12, 31), 1));
        assert_eq!(last_two[1].kind, crate::models::LeaveEventKind::Expiry);
    }

    #[test]
    fn test_unvalidated_huge_quantities_do_not_overflow() {
        let policy = LeavePolicy {
            base_days: 3_000_000_000,
            monthly_accrual_days: 500_000_000,
            ..LeavePolicy::default()
        };

        // Eleven monthly grants lapse the day before the 2024-07-01 anniversary
        let monthly = assess_year(date(2023, 7, 1), 2024, date(2024, 6, 30), &policy).unwrap();
        let expiry = monthly.history.expiries().next().unwrap();
        assert_eq!(expiry.date, date(2024, 6, 30));
        assert!(monthly.history.events.iter().all(|e| e.is_grant() == (e.days > 0)));

        let annual = assess_year(date(2020, 1, 10), 2024, date(2024, 12, 31), &policy).unwrap();
        assert!(annual.history.grants().all(|e| e.days > 0));
        assert_eq!(annual.history.expired_days(), annual.total_days());
    }

    #[test]
    fn test_cap_limits_base_and_bonus() {
        let policy = LeavePolicy {
            max_annual_days: Some(16),
            ..LeavePolicy::default()
        };
        // 2020-01-10 in 2024: 16 stepped + 1 prior bonus, capped at 16
        let assessment = assess_year(date(2020, 1, 10), 2024, date(2024, 12, 31), &policy).unwrap();
        assert_eq!(assessment.total_days(), 16);
        assert_eq!(
            assessment.history.events,
            vec![
                LeaveEvent::grant(date(2024, 1, 1), 16),
                LeaveEvent::expiry(date(2024, 12, 31), 16),
            ]
        );
    }
}
