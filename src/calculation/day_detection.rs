//! Day detection and shift segmentation logic.
//!
//! This module provides utilities for determining the day type (weekday, Saturday, Sunday)
//! for any datetime and for splitting shifts at midnight boundaries for correct penalty
//! rate application.

use chrono::{Datelike, NaiveDateTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// Represents the type of day for penalty rate calculation.
///
/// Used to determine which penalty rates apply to hours worked.
/// Per Aged Care Award 2010 clause 23, different rates apply for
/// Saturday and Sunday work.
///
/// # Example
///
/// ```
/// use award_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday - ordinary time rates apply.
    Weekday,
    /// Saturday - 150% for non-casuals, 175% for casuals (clause 23.1, 23.2(a)).
    Saturday,
    /// Sunday - 175% for non-casuals, 200% for casuals (clause 23.1, 23.2(b)).
    Sunday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given datetime.
///
/// Returns the appropriate [`DayType`] based on the day of the week
/// of the provided datetime.
///
/// # Arguments
///
/// * `datetime` - The datetime to check
///
/// # Returns
///
/// The [`DayType`] for the given datetime:
/// - [`DayType::Weekday`] for Monday through Friday
/// - [`DayType::Saturday`] for Saturday
/// - [`DayType::Sunday`] for Sunday
///
/// # Example
///
/// ```
/// use award_engine::calculation::get_day_type;
/// use award_engine::calculation::DayType;
/// use chrono::NaiveDateTime;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDateTime::parse_from_str("2026-01-17 15:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDateTime::parse_from_str("2026-01-18 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(sunday), DayType::Sunday);
///
/// // 2026-01-12 is a Monday
/// let monday = NaiveDateTime::parse_from_str("2026-01-12 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(datetime: NaiveDateTime) -> DayType {
    match datetime.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Represents a segment of a shift within a single day.
///
/// When a shift crosses midnight, it is split into multiple segments,
/// each belonging to a single day. This allows correct penalty rates
/// to be applied to each portion of the shift.
///
/// # Example
///
/// ```
/// use award_engine::calculation::{ShiftSegment, DayType};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let segment = ShiftSegment {
///     start_time: NaiveDateTime::parse_from_str("2026-01-17 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-18 00:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     day_type: DayType::Saturday,
///     hours: Decimal::new(20, 1), // 2.0 hours
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSegment {
    /// The start time of this segment.
    pub start_time: NaiveDateTime,
    /// The end time of this segment.
    pub end_time: NaiveDateTime,
    /// The day type for this segment (determines penalty rates).
    pub day_type: DayType,
    /// The number of worked hours in this segment.
    pub hours: Decimal,
}

/// Segments a shift by day boundaries.
///
/// Splits a shift at midnight boundaries, creating separate segments for each
/// calendar day the shift spans. Each segment records its start/end times,
/// day type, and hours worked within that day.
///
/// # Arguments
///
/// * `shift` - The shift to segment
///
/// # Returns
///
/// A vector of [`ShiftSegment`]s, ordered chronologically. The sum of all
/// segment hours equals the shift's total worked hours (excluding unpaid breaks).
///
/// # Behavior
///
/// - A shift entirely within one day returns a single segment
/// - A shift crossing midnight returns two segments (before and after midnight)
/// - Segments are ordered chronologically
/// - Each segment's day_type matches the day it falls on
/// - Unpaid breaks are NOT considered in segmentation (they are handled at shift level)
///
/// # Example
///
/// ```
/// use award_engine::calculation::{segment_by_day, DayType};
/// use award_engine::models::Shift;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// // A shift crossing Saturday to Sunday
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     start_time: NaiveDateTime::parse_from_str("2026-01-17 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-18 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     breaks: vec![],
/// };
///
/// let segments = segment_by_day(&shift);
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].day_type, DayType::Saturday);
/// assert_eq!(segments[0].hours, Decimal::new(20, 1)); // 2.0 hours
/// assert_eq!(segments[1].day_type, DayType::Sunday);
/// assert_eq!(segments[1].hours, Decimal::new(60, 1)); // 6.0 hours
/// ```
pub fn segment_by_day(shift: &Shift) -> Vec<ShiftSegment> {
    let mut segments = Vec::new();
    let mut current_start = shift.start_time;
    let shift_end = shift.end_time;

    // If shift doesn't cross midnight, return single segment
    if current_start.date() == shift_end.date() || current_start == shift_end {
        let hours = calculate_hours(current_start, shift_end);
        if hours > Decimal::ZERO {
            segments.push(ShiftSegment {
                start_time: current_start,
                end_time: shift_end,
                day_type: get_day_type(current_start),
                hours,
            });
        }
        return segments;
    }

    // Handle shifts crossing one or more midnights
    while current_start < shift_end {
        // Calculate midnight at the end of the current day
        let next_midnight = (current_start.date() + chrono::Duration::days(1))
            .and_hms_opt(0, 0, 0)
            .expect("Valid midnight time");

        // Segment ends at either midnight or shift end, whichever is first
        let segment_end = if next_midnight <= shift_end {
            next_midnight
        } else {
            shift_end
        };

        let hours = calculate_hours(current_start, segment_end);
        if hours > Decimal::ZERO {
            segments.push(ShiftSegment {
                start_time: current_start,
                end_time: segment_end,
                day_type: get_day_type(current_start),
                hours,
            });
        }

        current_start = segment_end;
    }

    segments
}

/// Calculates the number of hours between two datetimes.
///
/// # Arguments
///
/// * `start` - The start datetime
/// * `end` - The end datetime
///
/// # Returns
///
/// The number of hours as a [`Decimal`].
fn calculate_hours(start: NaiveDateTime, end: NaiveDateTime) -> Decimal {
    let duration_minutes = (end - start).num_minutes();
    Decimal::new(duration_minutes, 0) / Decimal::new(60, 0)
}
