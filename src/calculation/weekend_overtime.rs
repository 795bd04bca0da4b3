//! Weekend overtime rate calculation functionality.
//!
//! This module provides functions for calculating overtime pay on weekend days
//! (Saturday and Sunday) as per the Aged Care Award 2010 clause 25.1(a)(i)(B).
//!
//! ## Rate Structure
//!
//! **Weekend overtime is NOT tiered (unlike weekday overtime):**
//! - All weekend overtime hours: 200% for non-casuals, 250% for casuals (2.0 × 1.25)
//!
//! This differs from weekday overtime where the first 2 hours are at a lower rate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;
use crate::config::AwardConfig;
use crate::models::{AuditStep, Employee, EmploymentType, PayCategory, PayLine};

/// The result of weekend overtime calculation.
///
/// Contains the pay line for weekend overtime and the audit step
/// documenting the calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekendOvertimeResult {
    /// Pay line for weekend overtime (may be None if no overtime hours).
    pub pay_line: Option<PayLine>,
    /// Audit step recording the calculation.
    pub audit_step: Option<AuditStep>,
}

/// Calculates weekend overtime pay at flat 200% (or 250% for casuals).
///
/// Weekend overtime is calculated differently from weekday overtime:
/// - **All hours** are at 200% for non-casuals, 250% for casuals
/// - There is NO tiered rate (unlike weekday overtime)
///
/// # Arguments
///
/// * `overtime_hours` - The total overtime hours to be paid
/// * `base_rate` - The base hourly rate (before any loading)
/// * `employee` - The employee receiving overtime pay
/// * `config` - The award configuration containing overtime multipliers
/// * `day_type` - The type of weekend day (Saturday or Sunday)
/// * `date` - The date of the shift for pay line records
/// * `shift_id` - The shift ID for pay line records
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// A [`WeekendOvertimeResult`] containing:
/// - `pay_line`: Optional pay line (None if overtime_hours <= 0)
/// - `audit_step`: Optional audit step (None if overtime_hours <= 0)
///
/// # Award Reference
///
/// - Clause 25.1(a)(i)(B): Weekend overtime rates
///
/// # Examples
///
/// ## 2 hours Saturday overtime (full-time)
///
/// ```
/// use award_engine::calculation::{calculate_weekend_overtime, DayType};
/// use award_engine::config::ConfigLoader;
/// use award_engine::models::{Employee, EmploymentType, PayCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ConfigLoader::load("config/ma000018").unwrap().config().clone();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employment_type: EmploymentType::FullTime,
///     classification_code: "dce_level_3".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
///     employment_start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     base_hourly_rate: None,
///     tags: vec![],
/// };
/// let date = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(); // Saturday
///
/// let result = calculate_weekend_overtime(
///     Decimal::from_str("2.0").unwrap(),
///     Decimal::from_str("28.54").unwrap(),
///     &employee,
///     &config,
///     DayType::Saturday,
///     date,
///     "shift_001",
///     1,
/// );
///
/// assert!(result.pay_line.is_some());
/// let pay_line = result.pay_line.unwrap();
/// assert_eq!(pay_line.category, PayCategory::Overtime200);
/// // 2h × ($28.54 × 2.0) = 2h × $57.08 = $114.16
/// assert_eq!(pay_line.amount, Decimal::from_str("114.16").unwrap());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn calculate_weekend_overtime(
    overtime_hours: Decimal,
    base_rate: Decimal,
    employee: &Employee,
    config: &AwardConfig,
    day_type: DayType,
    date: NaiveDate,
    shift_id: &str,
    step_number: u32,
) -> WeekendOvertimeResult {
    // If no overtime, return empty result
    if overtime_hours <= Decimal::ZERO {
        return WeekendOvertimeResult {
            pay_line: None,
            audit_step: None,
        };
    }

    // Get weekend overtime rates from config
    let weekend_overtime = &config.penalties().overtime.weekend;

    // Determine multiplier based on day type and employment type
    let multiplier = match day_type {
        DayType::Saturday => match employee.employment_type {
            EmploymentType::FullTime => weekend_overtime.saturday.full_time,
            EmploymentType::PartTime => weekend_overtime.saturday.part_time,
            EmploymentType::Casual => weekend_overtime.saturday.casual,
        },
        DayType::Sunday => match employee.employment_type {
            EmploymentType::FullTime => weekend_overtime.sunday.full_time,
            EmploymentType::PartTime => weekend_overtime.sunday.part_time,
            EmploymentType::Casual => weekend_overtime.sunday.casual,
        },
        DayType::Weekday => {
            // Weekend overtime should not be called for weekdays
            // but handle gracefully by returning empty result
            return WeekendOvertimeResult {
                pay_line: None,
                audit_step: None,
            };
        }
    };

    let employment_type_str = match employee.employment_type {
        EmploymentType::FullTime => "full_time",
        EmploymentType::PartTime => "part_time",
        EmploymentType::Casual => "casual",
    };

    let day_type_str = match day_type {
        DayType::Saturday => "Saturday",
        DayType::Sunday => "Sunday",
        DayType::Weekday => "Weekday",
    };

    let rate = base_rate * multiplier;
    let amount = overtime_hours * rate;

    let reasoning = if employee.is_casual() {
        format!(
            "{} overtime: {} hours at {}% ({}% × 1.25 casual loading): {} hours × ${} = ${}",
            day_type_str,
            overtime_hours.normalize(),
            (multiplier * Decimal::from(100)).normalize(),
            Decimal::from(200),
            overtime_hours.normalize(),
            rate.normalize(),
            amount.normalize()
        )
    } else {
        format!(
            "{} overtime: {} hours at {}%: {} hours × ${} = ${}",
            day_type_str,
            overtime_hours.normalize(),
            (multiplier * Decimal::from(100)).normalize(),
            overtime_hours.normalize(),
            rate.normalize(),
            amount.normalize()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "weekend_overtime".to_string(),
        rule_name: format!("{} Overtime", day_type_str),
        clause_ref: weekend_overtime.clause.clone(),
        input: serde_json::json!({
            "hours": overtime_hours.normalize().to_string(),
            "base_rate": base_rate.normalize().to_string(),
            "employment_type": employment_type_str,
            "day_type": day_type_str
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "rate": rate.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning,
    };

    let pay_line = PayLine {
        date,
        shift_id: shift_id.to_string(),
        category: PayCategory::Overtime200,
        hours: overtime_hours,
        rate,
        amount,
        clause_ref: weekend_overtime.clause.clone(),
    };

    WeekendOvertimeResult {
        pay_line: Some(pay_line),
        audit_step: Some(audit_step),
    }
}
