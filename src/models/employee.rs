//! Employee profile record and hire date parsing.
//!
//! Profile rows arrive from the caller with the hire date still in its
//! stored text form. Parsing happens here, at the boundary, so the
//! calculator only ever sees valid dates.

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An employee profile as fetched by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name, if the profile has one.
    #[serde(default)]
    pub name: Option<String>,
    /// The stored hire date; `None` when the profile field is null.
    #[serde(default)]
    pub hire_date: Option<String>,
}

impl EmployeeRecord {
    /// Parses the stored hire date.
    ///
    /// # Examples
    ///
    /// ```
    /// use leave_engine::models::EmployeeRecord;
    /// use chrono::NaiveDate;
    ///
    /// let employee = EmployeeRecord {
    ///     id: "emp_001".to_string(),
    ///     name: Some("Kim".to_string()),
    ///     hire_date: Some("2020-01-10".to_string()),
    /// };
    /// assert_eq!(
    ///     employee.parse_hire_date().unwrap(),
    ///     NaiveDate::from_ymd_opt(2020, 1, 10).unwrap()
    /// );
    /// ```
    pub fn parse_hire_date(&self) -> EngineResult<NaiveDate> {
        parse_hire_date(self.hire_date.as_deref())
    }
}

/// Parses a hire date, failing fast on null or malformed input.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, in which
/// case the date part as written is used.
pub fn parse_hire_date(value: Option<&str>) -> EngineResult<NaiveDate> {
    let raw = value.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(EngineError::InvalidHireDate {
            value: String::new(),
            message: "hire date is missing".to_string(),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|e| EngineError::InvalidHireDate {
            value: raw.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_hire_date(Some("2024-03-15")).unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_hire_date(Some(" 2024-03-15\n")).unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn test_parse_rfc3339_timestamp_keeps_written_date() {
        assert_eq!(
            parse_hire_date(Some("2023-07-01T00:00:00+09:00")).unwrap(),
            date(2023, 7, 1)
        );
    }

    #[test]
    fn test_null_hire_date_fails() {
        match parse_hire_date(None) {
            Err(EngineError::InvalidHireDate { value, message }) => {
                assert!(value.is_empty());
                assert!(message.contains("missing"));
            }
            other => panic!("Expected InvalidHireDate, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_hire_date_fails() {
        assert!(parse_hire_date(Some("   ")).is_err());
    }

    #[test]
    fn test_impossible_date_fails() {
        match parse_hire_date(Some("2023-02-30")) {
            Err(EngineError::InvalidHireDate { value, .. }) => {
                assert_eq!(value, "2023-02-30");
            }
            other => panic!("Expected InvalidHireDate, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_hire_date_fails() {
        assert!(parse_hire_date(Some("next tuesday")).is_err());
    }

    #[test]
    fn test_deserialize_employee_with_null_hire_date() {
        let json = r#"{ "id": "emp_009", "name": null, "hire_date": null }"#;
        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(employee.id, "emp_009");
        assert!(employee.parse_hire_date().is_err());
    }

    #[test]
    fn test_deserialize_employee_without_optional_fields() {
        let json = r#"{ "id": "emp_010" }"#;
        let employee: EmployeeRecord = serde_json::from_str(json).unwrap();

        assert_eq!(employee.name, None);
        assert_eq!(employee.hire_date, None);
    }
}
