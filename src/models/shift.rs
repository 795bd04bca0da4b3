//! Shift model and related types.
//!
//! This module defines the Shift and Break structs for representing
//! work shifts and breaks in the award interpretation system.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a break taken during a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Break {
    /// The start time of the break.
    pub start_time: NaiveDateTime,
    /// The end time of the break.
    pub end_time: NaiveDateTime,
    /// Whether the break is paid (true) or unpaid (false).
    pub is_paid: bool,
}

impl Break {
    /// Returns the duration of the break in minutes.
    fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Represents a work shift with timing information and breaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    /// Unique identifier for the shift.
    pub id: String,
    /// The date of the shift (used for determining day type).
    pub date: NaiveDate,
    /// The start time of the shift.
    pub start_time: NaiveDateTime,
    /// The end time of the shift.
    pub end_time: NaiveDateTime,
    /// Breaks taken during the shift.
    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl Shift {
    /// Calculates the total worked hours for the shift.
    ///
    /// This method calculates the total duration of the shift and subtracts
    /// any unpaid breaks. Paid breaks are NOT subtracted from the total.
    ///
    /// # Returns
    ///
    /// The number of worked hours as a Decimal.
    ///
    /// # Examples
    ///
    /// ```
    /// use award_engine::models::{Shift, Break};
    /// use chrono::{NaiveDate, NaiveDateTime};
    /// use rust_decimal::Decimal;
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
    ///     start_time: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     breaks: vec![],
    /// };
    /// assert_eq!(shift.worked_hours(), Decimal::new(80, 1)); // 8.0 hours
    /// ```
    pub fn worked_hours(&self) -> Decimal {
        // Calculate total shift duration in minutes
        let total_minutes = (self.end_time - self.start_time).num_minutes();

        // Calculate total unpaid break minutes
        let unpaid_break_minutes: i64 = self
            .breaks
            .iter()
            .filter(|b| !b.is_paid)
            .map(|b| b.duration_minutes())
            .sum();

        // Worked minutes = total - unpaid breaks
        let worked_minutes = total_minutes - unpaid_break_minutes;

        // Convert minutes to hours as Decimal
        Decimal::new(worked_minutes, 0) / Decimal::new(60, 0)
    }

    /// Returns the day of the week for the shift.
    ///
    /// # Returns
    ///
    /// The weekday (Monday through Sunday) of the shift date.
    ///
    /// # Examples
    ///
    /// ```
    /// use award_engine::models::Shift;
    /// use chrono::{NaiveDate, NaiveDateTime, Weekday};
    ///
    /// let shift = Shift {
    ///     id: "shift_001".to_string(),
    ///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(), // Thursday
    ///     start_time: NaiveDateTime::parse_from_str("2026-01-15 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     end_time: NaiveDateTime::parse_from_str("2026-01-15 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
    ///     breaks: vec![],
    /// };
    /// assert_eq!(shift.day_of_week(), Weekday::Thu);
    /// ```
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}
