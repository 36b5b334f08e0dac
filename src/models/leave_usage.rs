//! Leave usage records supplied by callers.
//!
//! Usage is fetched from the approval workflow by the caller; the engine
//! only aggregates and validates it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageStatus {
    /// Approved leave; counts against the balance.
    Approved,
    /// Awaiting approval.
    Pending,
    /// Declined by an approver.
    Rejected,
    /// Withdrawn by the employee.
    Cancelled,
}

/// A leave request consuming annual leave days.
///
/// `days` is supplied by the caller rather than derived from the date
/// range, since half days and non-working days are decided upstream.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveUsage, UsageStatus};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let usage = LeaveUsage {
///     id: "leave_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
///     days: Decimal::new(15, 1),
///     status: UsageStatus::Approved,
/// };
/// assert!(usage.is_approved());
/// assert!(usage.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveUsage {
    /// Identifier of the leave request.
    pub id: String,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// Days consumed; may be fractional for half days.
    pub days: Decimal,
    /// Approval state.
    pub status: UsageStatus,
}

impl LeaveUsage {
    /// Returns true if the request has been approved.
    pub fn is_approved(&self) -> bool {
        self.status == UsageStatus::Approved
    }

    /// Rejects negative day counts and reversed date ranges.
    pub fn validate(&self) -> EngineResult<()> {
        if self.days < Decimal::ZERO {
            return Err(EngineError::InvalidUsage {
                usage_id: self.id.clone(),
                message: format!("days cannot be negative (got {})", self.days),
            });
        }
        if self.end_date < self.start_date {
            return Err(EngineError::InvalidUsage {
                usage_id: self.id.clone(),
                message: format!(
                    "end date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_usage(days: &str, status: UsageStatus) -> LeaveUsage {
        LeaveUsage {
            id: "leave_001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            days: dec(days),
            status,
        }
    }

    #[test]
    fn test_deserialize_half_day_usage() {
        let json = r#"{
            "id": "leave_002",
            "start_date": "2024-07-08",
            "end_date": "2024-07-08",
            "days": "0.5",
            "status": "approved"
        }"#;

        let usage: LeaveUsage = serde_json::from_str(json).unwrap();
        assert_eq!(usage.days, dec("0.5"));
        assert_eq!(usage.status, UsageStatus::Approved);
    }

    #[test]
    fn test_only_approved_counts_as_approved() {
        assert!(create_usage("1", UsageStatus::Approved).is_approved());
        assert!(!create_usage("1", UsageStatus::Pending).is_approved());
        assert!(!create_usage("1", UsageStatus::Rejected).is_approved());
        assert!(!create_usage("1", UsageStatus::Cancelled).is_approved());
    }

    #[test]
    fn test_negative_days_rejected() {
        let usage = create_usage("-1", UsageStatus::Approved);
        match usage.validate() {
            Err(EngineError::InvalidUsage { usage_id, message }) => {
                assert_eq!(usage_id, "leave_001");
                assert!(message.contains("negative"));
            }
            other => panic!("Expected InvalidUsage, got {:?}", other),
        }
    }

    #[test]
    fn test_reversed_range_rejected() {
        let mut usage = create_usage("1", UsageStatus::Approved);
        usage.end_date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(usage.validate().is_err());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UsageStatus::Cancelled).unwrap(),
            "\"cancelled\""
        );
    }
}
