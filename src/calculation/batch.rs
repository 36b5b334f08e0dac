//! Balance computation for many employees at once.
//!
//! Each employee is an independent unit: a bad hire date or usage record
//! fails that employee only, and the rest of the batch still completes.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::LeavePolicy;
use crate::error::EngineResult;
use crate::models::{EmployeeRecord, LeaveBalance, LeaveUsage};

use super::balance::{build_balance, total_used_days};

/// An employee that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchFailure {
    /// The employee that failed.
    pub employee_id: String,
    /// Why the employee was skipped.
    pub error: String,
}

/// The result of a batch run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    /// Balances for every employee that succeeded.
    pub balances: Vec<LeaveBalance>,
    /// Employees that were skipped.
    pub failures: Vec<BatchFailure>,
}

/// Computes balances for `employees` in `target_year` as of
/// `evaluation_date`.
///
/// Usage records are looked up by employee ID; employees without an entry
/// have used nothing.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use leave_engine::calculation::compute_balances;
/// use leave_engine::config::LeavePolicy;
/// use leave_engine::models::EmployeeRecord;
/// use chrono::NaiveDate;
///
/// let employees = vec![
///     EmployeeRecord { id: "a".into(), name: None, hire_date: Some("2020-01-10".into()) },
///     EmployeeRecord { id: "b".into(), name: None, hire_date: None },
/// ];
/// let eval = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
///
/// let outcome = compute_balances(&employees, &HashMap::new(), 2024, eval, &LeavePolicy::default());
/// assert_eq!(outcome.balances.len(), 1);
/// assert_eq!(outcome.failures[0].employee_id, "b");
/// ```
pub fn compute_balances(
    employees: &[EmployeeRecord],
    usage_by_employee: &HashMap<String, Vec<LeaveUsage>>,
    target_year: i32,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();

    for employee in employees {
        let usage = usage_by_employee
            .get(&employee.id)
            .map(Vec::as_slice)
            .unwrap_or_default();

        match employee_balance(employee, usage, target_year, evaluation_date, policy) {
            Ok(balance) => outcome.balances.push(balance),
            Err(err) => {
                warn!(
                    employee_id = %employee.id,
                    target_year,
                    error = %err,
                    "Skipping employee in balance batch"
                );
                outcome.failures.push(BatchFailure {
                    employee_id: employee.id.clone(),
                    error: err.to_string(),
                });
            }
        }
    }

    debug!(
        target_year,
        %evaluation_date,
        succeeded = outcome.balances.len(),
        failed = outcome.failures.len(),
        "Balance batch completed"
    );

    outcome
}

fn employee_balance(
    employee: &EmployeeRecord,
    usage: &[LeaveUsage],
    target_year: i32,
    evaluation_date: NaiveDate,
    policy: &LeavePolicy,
) -> EngineResult<LeaveBalance> {
    let hire_date = employee.parse_hire_date()?;
    for record in usage {
        record.validate()?;
    }
    let used_days = total_used_days(usage, target_year);

    Ok(build_balance(
        &employee.id,
        hire_date,
        target_year,
        evaluation_date,
        used_days,
        policy,
    ))
}
