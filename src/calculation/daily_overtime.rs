//! Daily overtime detection functionality.
//!
//! This module provides functions for detecting when a shift exceeds the daily
//! overtime threshold and splitting hours into ordinary and overtime portions
//! as per the Aged Care Award 2010.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// The result of detecting daily overtime for a shift or segment.
///
/// Contains the split between ordinary hours and overtime hours,
/// along with the audit step documenting the detection.
///
/// # Example
///
/// ```
/// use award_engine::calculation::DailyOvertimeDetection;
/// use award_engine::models::AuditStep;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let detection = DailyOvertimeDetection {
///     ordinary_hours: Decimal::from_str("8.0").unwrap(),
///     overtime_hours: Decimal::from_str("2.0").unwrap(),
///     audit_step: AuditStep {
///         step_number: 1,
///         rule_id: "daily_overtime_detection".to_string(),
///         rule_name: "Daily Overtime Detection".to_string(),
///         clause_ref: "22.1(c), 25.1".to_string(),
///         input: serde_json::json!({"worked_hours": "10.0", "threshold": "8.0"}),
///         output: serde_json::json!({"ordinary_hours": "8.0", "overtime_hours": "2.0"}),
///         reasoning: "10.0 hours worked exceeds 8.0 hour threshold".to_string(),
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOvertimeDetection {
    /// The number of ordinary hours (up to the threshold).
    pub ordinary_hours: Decimal,
    /// The number of overtime hours (hours exceeding the threshold).
    pub overtime_hours: Decimal,
    /// The audit step recording this detection.
    pub audit_step: AuditStep,
}

/// Default daily overtime threshold in hours.
///
/// Per Aged Care Award 2010 clause 22.1(c), ordinary hours are up to 8 hours per day.
pub const DEFAULT_DAILY_OVERTIME_THRESHOLD: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Detects whether hours worked exceed the daily overtime threshold.
///
/// Splits the worked hours into ordinary hours (up to the threshold) and
/// overtime hours (any hours exceeding the threshold).
///
/// # Arguments
///
/// * `worked_hours` - The total hours worked in the shift or segment
/// * `threshold` - The overtime threshold (typically 8 hours per day)
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`DailyOvertimeDetection`] containing:
/// - `ordinary_hours`: Hours up to the threshold (capped at threshold)
/// - `overtime_hours`: Hours exceeding the threshold (can be zero)
/// - `audit_step`: Documentation of the detection with clause references
///
/// # Award Reference
///
/// - Clause 22.1(c): Defines ordinary hours as up to 8 hours per day
/// - Clause 25.1: Defines overtime as hours in excess of ordinary hours
///
/// # Examples
///
/// ## Shift at threshold (no overtime)
///
/// ```
/// use award_engine::calculation::{detect_daily_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worked = Decimal::from_str("8.0").unwrap();
/// let result = detect_daily_overtime(worked, DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
///
/// assert_eq!(result.ordinary_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
///
/// ## Shift exceeding threshold
///
/// ```
/// use award_engine::calculation::{detect_daily_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worked = Decimal::from_str("10.0").unwrap();
/// let result = detect_daily_overtime(worked, DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
///
/// assert_eq!(result.ordinary_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::from_str("2.0").unwrap());
/// ```
///
/// ## Short shift (under threshold)
///
/// ```
/// use award_engine::calculation::{detect_daily_overtime, DEFAULT_DAILY_OVERTIME_THRESHOLD};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let worked = Decimal::from_str("6.0").unwrap();
/// let result = detect_daily_overtime(worked, DEFAULT_DAILY_OVERTIME_THRESHOLD, 1);
///
/// assert_eq!(result.ordinary_hours, Decimal::from_str("6.0").unwrap());
/// assert_eq!(result.overtime_hours, Decimal::ZERO);
/// ```
pub fn detect_daily_overtime(
    worked_hours: Decimal,
    threshold: Decimal,
    step_number: u32,
) -> DailyOvertimeDetection {
    // Calculate ordinary hours (capped at threshold)
    let ordinary_hours = if worked_hours <= threshold {
        worked_hours
    } else {
        threshold
    };

    // Calculate overtime hours (excess over threshold)
    let overtime_hours = if worked_hours > threshold {
        worked_hours - threshold
    } else {
        Decimal::ZERO
    };

    // Determine reasoning based on outcome
    let reasoning = if overtime_hours > Decimal::ZERO {
        format!(
            "{} hours worked exceeds {} hour threshold by {} hours, triggering overtime",
            worked_hours.normalize(),
            threshold.normalize(),
            overtime_hours.normalize()
        )
    } else if worked_hours == threshold {
        format!(
            "{} hours worked equals {} hour threshold, no overtime triggered",
            worked_hours.normalize(),
            threshold.normalize()
        )
    } else {
        format!(
            "{} hours worked is under {} hour threshold, no overtime triggered",
            worked_hours.normalize(),
            threshold.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "daily_overtime_detection".to_string(),
        rule_name: "Daily Overtime Detection".to_string(),
        clause_ref: "22.1(c), 25.1".to_string(),
        input: serde_json::json!({
            "worked_hours": worked_hours.normalize().to_string(),
            "threshold": threshold.normalize().to_string()
        }),
        output: serde_json::json!({
            "ordinary_hours": ordinary_hours.normalize().to_string(),
            "overtime_hours": overtime_hours.normalize().to_string()
        }),
        reasoning,
    };

    DailyOvertimeDetection {
        ordinary_hours,
        overtime_hours,
        audit_step,
    }
}
