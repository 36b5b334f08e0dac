//! Request types for the Leave Accrual Engine API.
//!
//! This module defines the JSON request bodies for the entitlement,
//! history, balance and batch endpoints.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{EmployeeRecord, LeaveUsage};

/// Request body for the `/entitlement` and `/history` endpoints.
///
/// The hire date is kept as text so that a null or malformed value is
/// reported as `INVALID_HIRE_DATE` instead of a generic JSON error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's hire date (`YYYY-MM-DD` or RFC 3339).
    #[serde(default)]
    pub hire_date: Option<String>,
    /// The calendar year to compute.
    pub target_year: i32,
    /// The "as of" date. Defaults to the current UTC date, which can differ
    /// from the local calendar date near midnight; send it explicitly to
    /// evaluate as of a local date.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
}

/// Request body for the `/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// Unique identifier for the employee.
    pub employee_id: String,
    /// The employee's hire date (`YYYY-MM-DD` or RFC 3339).
    #[serde(default)]
    pub hire_date: Option<String>,
    /// The calendar year to compute.
    pub target_year: i32,
    /// The "as of" date. Defaults to the current UTC date, which can differ
    /// from the local calendar date near midnight; send it explicitly to
    /// evaluate as of a local date.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
    /// Days already used. Takes precedence over `usage`.
    #[serde(default)]
    pub used_days: Option<Decimal>,
    /// Usage records to aggregate when `used_days` is absent.
    #[serde(default)]
    pub usage: Vec<LeaveUsage>,
}

/// Request body for the `/balances/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchBalanceRequest {
    /// The calendar year to compute.
    pub target_year: i32,
    /// The "as of" date. Defaults to the current UTC date, which can differ
    /// from the local calendar date near midnight; send it explicitly to
    /// evaluate as of a local date.
    #[serde(default)]
    pub evaluation_date: Option<NaiveDate>,
    /// Employee profiles to process.
    pub employees: Vec<EmployeeRecord>,
    /// Usage records keyed by employee ID.
    #[serde(default)]
    pub usage: HashMap<String, Vec<LeaveUsage>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_entitlement_request() {
        let json = r#"{
            "employee_id": "emp_001",
            "hire_date": "2020-01-10",
            "target_year": 2024,
            "evaluation_date": "2024-12-31"
        }"#;

        let request: EntitlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "emp_001");
        assert_eq!(request.hire_date.as_deref(), Some("2020-01-10"));
        assert_eq!(request.target_year, 2024);
        assert_eq!(
            request.evaluation_date,
            Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        );
    }

    #[test]
    fn test_entitlement_request_optional_fields() {
        let json = r#"{ "employee_id": "emp_001", "hire_date": null, "target_year": 2024 }"#;

        let request: EntitlementRequest = serde_json::from_str(json).unwrap();
        assert!(request.hire_date.is_none());
        assert!(request.evaluation_date.is_none());
    }

    #[test]
    fn test_deserialize_balance_request_with_usage() {
        let json = r#"{
            "employee_id": "emp_001",
            "hire_date": "2020-01-10",
            "target_year": 2024,
            "usage": [
                {
                    "id": "leave_001",
                    "start_date": "2024-05-02",
                    "end_date": "2024-05-02",
                    "days": "0.5",
                    "status": "approved"
                }
            ]
        }"#;

        let request: BalanceRequest = serde_json::from_str(json).unwrap();
        assert!(request.used_days.is_none());
        assert_eq!(request.usage.len(), 1);
        assert_eq!(request.usage[0].days, Decimal::from_str("0.5").unwrap());
    }

    #[test]
    fn test_deserialize_batch_request() {
        let json = r#"{
            "target_year": 2024,
            "employees": [
                { "id": "emp_001", "name": "Kim", "hire_date": "2020-01-10" },
                { "id": "emp_002" }
            ]
        }"#;

        let request: BatchBalanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employees.len(), 2);
        assert!(request.employees[1].hire_date.is_none());
        assert!(request.usage.is_empty());
    }
}
