//! Entitlement breakdown with an audit trail.
//!
//! Explains a year's entitlement as an ordered list of rule applications,
//! so that HR staff can trace every granted and expired day.

use chrono::NaiveDate;

use crate::config::LeavePolicy;
use crate::models::{AuditStep, EntitlementBreakdown, TenureRegime};

use super::assessment::{YearAssessment, assess_year};
use super::tenure::{days_worked_through_prior_year_end, first_anniversary};

/// Computes the entitlement for `target_year` together with the decisions
/// that produced it.
///
/// Returns `None` when the year lies outside the representable date range.
///
/// # Example
///
/// ```
/// use leave_engine::calculation::explain_entitlement;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::TenureRegime;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
/// let eval = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
/// let breakdown = explain_entitlement(hire, 2024, eval, &LeavePolicy::default()).unwrap();
///
/// assert_eq!(breakdown.regime, TenureRegime::AnnualGrant);
/// assert_eq!(breakdown.total_days, 17);
/// assert_eq!(breakdown.audit_steps[0].rule_id, "tenure_regime");
/// ```
pub fn explain_entitlement(
    hire_date: NaiveDate,
    target_year: i32,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> Option<EntitlementBreakdown> {
    let assessment = assess_year(hire_date, target_year, evaluation_date, policy)?;
    let audit_steps = build_audit_steps(&assessment, hire_date, evaluation_date, policy);

    Some(EntitlementBreakdown {
        regime: assessment.regime,
        tenure_days: assessment.tenure_days,
        full_years: assessment.full_years,
        monthly_days: assessment.monthly_days,
        stepped_base_days: assessment.stepped_base_days,
        prorated_days: assessment.prorated_days,
        prior_bonus_days: assessment.prior_bonus_days,
        in_year_bonus_days: assessment.in_year_bonus_days,
        total_days: assessment.total_days(),
        history: assessment.history,
        audit_steps,
    })
}

fn build_audit_steps(
    assessment: &YearAssessment,
    hire_date: NaiveDate,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> Vec<AuditStep> {
    let mut steps = vec![regime_step(assessment, hire_date, policy)];

    match assessment.regime {
        TenureRegime::MonthlyAccrual => {
            steps.push(first_year_step(assessment, hire_date, evaluation_date, policy))
        }
        TenureRegime::AnnualGrant => {
            steps.push(stepped_base_step(assessment, policy));
            if let Some(prorated) = assessment.prorated_days {
                steps.push(proration_step(assessment, hire_date, prorated, policy));
            }
            steps.push(bonus_step(assessment, policy));
        }
    }

    steps.push(expiry_step(assessment, evaluation_date));

    for (index, step) in steps.iter_mut().enumerate() {
        step.step_number = index as u32 + 1;
    }
    steps
}

fn regime_step(assessment: &YearAssessment, hire_date: NaiveDate, policy: &LeavePolicy) -> AuditStep {
    let comparison = match assessment.regime {
        TenureRegime::MonthlyAccrual => "<",
        TenureRegime::AnnualGrant => ">=",
    };

    AuditStep {
        step_number: 0,
        rule_id: "tenure_regime".to_string(),
        rule_name: "Tenure Regime".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "year_start": assessment.window.start.to_string(),
            "tenure_year_days": policy.tenure_year_days
        }),
        output: serde_json::json!({
            "tenure_days": assessment.tenure_days,
            "full_years": assessment.full_years,
            "regime": assessment.regime.to_string()
        }),
        reasoning: format!(
            "{} days of tenure at {} {} {} days: {}",
            assessment.tenure_days,
            assessment.window.start,
            comparison,
            policy.tenure_year_days,
            assessment.regime
        ),
    }
}

fn first_year_step(
    assessment: &YearAssessment,
    hire_date: NaiveDate,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> AuditStep {
    let anniversary = first_anniversary(hire_date);

    match assessment.prorated_days {
        Some(lump) => {
            let worked = days_worked_through_prior_year_end(hire_date, assessment.window.start);
            AuditStep {
                step_number: 0,
                rule_id: "first_year_lump_sum".to_string(),
                rule_name: "First Year Lump Sum".to_string(),
                input: serde_json::json!({
                    "days_worked": worked,
                    "base_days": policy.base_days,
                    "first_anniversary": anniversary.map(|d| d.to_string())
                }),
                output: serde_json::json!({
                    "lump_sum_days": lump,
                    "replaces_monthly_accrual": true
                }),
                reasoning: format!(
                    "ceil({} / {} x {}) = {} days granted on the first anniversary",
                    worked, policy.tenure_year_days, policy.base_days, lump
                ),
            }
        }
        None => {
            let grants = assessment.history.grants().count();
            AuditStep {
                step_number: 0,
                rule_id: "monthly_accrual".to_string(),
                rule_name: "Monthly Accrual".to_string(),
                input: serde_json::json!({
                    "monthly_accrual_days": policy.monthly_accrual_days,
                    "first_anniversary": anniversary.map(|d| d.to_string()),
                    "evaluation_date": evaluation_date.to_string()
                }),
                output: serde_json::json!({
                    "grants": grants,
                    "days": assessment.monthly_days
                }),
                reasoning: format!(
                    "{} monthly grant(s) of {} day(s) in {} up to {}",
                    grants,
                    policy.monthly_accrual_days,
                    assessment.window.year,
                    evaluation_date
                ),
            }
        }
    }
}

fn stepped_base_step(assessment: &YearAssessment, policy: &LeavePolicy) -> AuditStep {
    AuditStep {
        step_number: 0,
        rule_id: "stepped_base".to_string(),
        rule_name: "Stepped Annual Base".to_string(),
        input: serde_json::json!({
            "full_years": assessment.full_years,
            "base_days": policy.base_days,
            "step_interval_years": policy.step_interval_years
        }),
        output: serde_json::json!({
            "stepped_base_days": assessment.stepped_base_days
        }),
        reasoning: format!(
            "{} base + {} stepped day(s) for {} full year(s)",
            policy.base_days,
            assessment.stepped_base_days.saturating_sub(policy.base_days),
            assessment.full_years
        ),
    }
}

fn proration_step(
    assessment: &YearAssessment,
    hire_date: NaiveDate,
    prorated: u32,
    policy: &LeavePolicy,
) -> AuditStep {
    let worked = days_worked_through_prior_year_end(hire_date, assessment.window.start);
    let applied = prorated > assessment.stepped_base_days;

    AuditStep {
        step_number: 0,
        rule_id: "first_anniversary_proration".to_string(),
        rule_name: "First Anniversary Proration".to_string(),
        input: serde_json::json!({
            "days_worked": worked,
            "stepped_base_days": assessment.stepped_base_days
        }),
        output: serde_json::json!({
            "prorated_days": prorated,
            "applied": applied
        }),
        reasoning: format!(
            "ceil({} / {} x {}) = {} vs stepped base {}: using {}",
            worked,
            policy.tenure_year_days,
            policy.base_days,
            prorated,
            assessment.stepped_base_days,
            prorated.max(assessment.stepped_base_days)
        ),
    }
}

fn bonus_step(assessment: &YearAssessment, policy: &LeavePolicy) -> AuditStep {
    let bonus_dates: Vec<String> = assessment
        .history
        .grants()
        .filter(|e| e.date != assessment.window.start)
        .map(|e| e.date.to_string())
        .collect();

    AuditStep {
        step_number: 0,
        rule_id: "anniversary_bonus".to_string(),
        rule_name: "Anniversary Bonus".to_string(),
        input: serde_json::json!({
            "bonus_first_anniversary": policy.bonus_first_anniversary,
            "bonus_interval_years": policy.bonus_interval_years,
            "bonus_days": policy.bonus_days
        }),
        output: serde_json::json!({
            "prior_bonus_days": assessment.prior_bonus_days,
            "in_year_bonus_days": assessment.in_year_bonus_days,
            "in_year_dates": bonus_dates
        }),
        reasoning: format!(
            "{} day(s) from earlier anniversaries added to the January 1 grant, {} day(s) granted during {}",
            assessment.prior_bonus_days, assessment.in_year_bonus_days, assessment.window.year
        ),
    }
}

fn expiry_step(assessment: &YearAssessment, evaluation_date: NaiveDate) -> AuditStep {
    let expiries: Vec<serde_json::Value> = assessment
        .history
        .expiries()
        .map(|e| serde_json::json!({ "date": e.date.to_string(), "days": e.magnitude() }))
        .collect();
    let expired = assessment.history.expired_days();

    let reasoning = if expiries.is_empty() {
        format!("No expiry reached as of {}", evaluation_date)
    } else {
        format!("{} day(s) expired as of {}", expired, evaluation_date)
    };

    AuditStep {
        step_number: 0,
        rule_id: "expiry".to_string(),
        rule_name: "Expiry".to_string(),
        input: serde_json::json!({
            "evaluation_date": evaluation_date.to_string(),
            "granted_days": assessment.total_days()
        }),
        output: serde_json::json!({
            "expired_days": expired,
            "expiries": expiries
        }),
        reasoning,
    }
}
