//! Grant and expiry events and the per-year leave history.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether an event credits or forfeits leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveEventKind {
    /// Leave days credited to the employee.
    Grant,
    /// Unused leave days forfeited.
    Expiry,
}

/// A single grant or expiry of leave days.
///
/// Grants carry a positive day count and expiries a negative one, so the
/// sum of a history's `days` is the net movement for the year.
///
/// # Example
///
/// ```
/// use leave_engine::models::{LeaveEvent, LeaveEventKind};
/// use chrono::NaiveDate;
///
/// let grant = LeaveEvent::grant(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 16);
/// assert_eq!(grant.kind, LeaveEventKind::Grant);
/// assert_eq!(grant.days, 16);
///
/// let expiry = LeaveEvent::expiry(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(), 16);
/// assert_eq!(expiry.days, -16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaveEvent {
    /// The date the event takes effect.
    pub date: NaiveDate,
    /// Signed day count: positive for grants, negative for expiries.
    pub days: i32,
    /// Grant or expiry.
    pub kind: LeaveEventKind,
}

impl LeaveEvent {
    /// Creates a grant of `days` on `date`.
    ///
    /// Quantities beyond `i32::MAX` are clamped.
    pub fn grant(date: NaiveDate, days: u32) -> Self {
        Self {
            date,
            days: clamp_days(days),
            kind: LeaveEventKind::Grant,
        }
    }

    /// Creates an expiry forfeiting `days` on `date`.
    pub fn expiry(date: NaiveDate, days: u32) -> Self {
        Self {
            date,
            days: -clamp_days(days),
            kind: LeaveEventKind::Expiry,
        }
    }

    /// Returns true for grant events.
    pub fn is_grant(&self) -> bool {
        self.kind == LeaveEventKind::Grant
    }

    /// The unsigned number of days moved by this event.
    pub fn magnitude(&self) -> u32 {
        self.days.unsigned_abs()
    }
}

/// The ordered grant/expiry events of one employee within one year.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeaveHistory {
    /// The calendar year every event falls in.
    pub year: i32,
    /// Events sorted by date, grants before expiries on the same day.
    pub events: Vec<LeaveEvent>,
}

impl LeaveHistory {
    /// Total days granted in the year.
    pub fn granted_days(&self) -> u32 {
        self.events
            .iter()
            .filter(|e| e.is_grant())
            .map(LeaveEvent::magnitude)
            .fold(0, u32::saturating_add)
    }

    /// Total days forfeited in the year.
    pub fn expired_days(&self) -> u32 {
        self.events
            .iter()
            .filter(|e| !e.is_grant())
            .map(LeaveEvent::magnitude)
            .fold(0, u32::saturating_add)
    }

    /// Iterates over grant events only.
    pub fn grants(&self) -> impl Iterator<Item = &LeaveEvent> {
        self.events.iter().filter(|e| e.is_grant())
    }

    /// Iterates over expiry events only.
    pub fn expiries(&self) -> impl Iterator<Item = &LeaveEvent> {
        self.events.iter().filter(|e| !e.is_grant())
    }

    /// Returns true when nothing was granted or expired.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn clamp_days(days: u32) -> i32 {
    i32::try_from(days).unwrap_or(i32::MAX)
}
