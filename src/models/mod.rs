//! Core data models for the Leave Accrual Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod employee;
mod leave_event;
mod leave_usage;

pub use calculation_result::{
    AuditStep, AuditTrace, EntitlementBreakdown, LeaveBalance, TenureRegime,
};
pub use employee::{EmployeeRecord, parse_hire_date};
pub use leave_event::{LeaveEvent, LeaveEventKind, LeaveHistory};
pub use leave_usage::{LeaveUsage, UsageStatus};
