//! Employee model and related types.
//!
//! This module defines the Employee struct and EmploymentType enum
//! for representing workers in the award interpretation system.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment (typically 38 hours per week).
    FullTime,
    /// Part-time employment (less than 38 hours per week with regular pattern).
    PartTime,
    /// Casual employment (no guaranteed hours, includes casual loading).
    Casual,
}

/// Represents an employee subject to award interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// The award classification code (e.g., "dce_level_3").
    pub classification_code: String,
    /// The employee's date of birth.
    pub date_of_birth: NaiveDate,
    /// The date the employee started employment.
    pub employment_start_date: NaiveDate,
    /// Optional override for the base hourly rate.
    pub base_hourly_rate: Option<Decimal>,
    /// Tags for categorizing employees (e.g., qualifications, departments).
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Employee {
    /// Returns true if the employee is a casual worker.
    ///
    /// # Examples
    ///
    /// ```
    /// use award_engine::models::{Employee, EmploymentType};
    /// use chrono::NaiveDate;
    ///
    /// let casual = Employee {
    ///     id: "emp_001".to_string(),
    ///     employment_type: EmploymentType::Casual,
    ///     classification_code: "dce_level_3".to_string(),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
    ///     employment_start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
    ///     base_hourly_rate: None,
    ///     tags: vec![],
    /// };
    /// assert!(casual.is_casual());
    /// ```
    pub fn is_casual(&self) -> bool {
        self.employment_type == EmploymentType::Casual
    }
}
