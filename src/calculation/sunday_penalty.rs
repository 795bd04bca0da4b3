//! Sunday penalty rate calculation functionality.
//!
//! This module provides functions for calculating Sunday penalty rates
//! as per clause 23.1 and 23.2(b) of the Aged Care Award 2010.

use rust_decimal::Decimal;

use crate::config::AwardConfig;
use crate::models::{AuditStep, Employee, EmploymentType, PayCategory, PayLine};

use super::ShiftSegment;

/// The result of a Sunday penalty calculation, including the pay line and audit step.
#[derive(Debug, Clone)]
pub struct SundayPayResult {
    /// The pay line for the Sunday penalty.
    pub pay_line: PayLine,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates Sunday penalty pay for a shift segment.
///
/// Applies the appropriate Sunday penalty rate based on employment type:
/// - Full-time: 175% of base rate (clause 23.1)
/// - Part-time: 175% of base rate (clause 23.1)
/// - Casual: 200% of base rate (clause 23.2(b)) - NOT ordinary rate + casual loading + penalty
///
/// # Arguments
///
/// * `segment` - The shift segment to calculate pay for (must be on a Sunday)
/// * `employee` - The employee working the shift
/// * `base_rate` - The base hourly rate from the award
/// * `config` - The award configuration containing penalty rates
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `SundayPayResult` containing the pay line and audit step.
///
/// # Award Reference
///
/// - Clause 23.1: Weekend penalty rates for full-time and part-time employees
/// - Clause 23.2(b): Sunday penalty rate for casual employees (200%)
///
/// # Examples
///
/// ```no_run
/// use award_engine::calculation::{calculate_sunday_pay, ShiftSegment, DayType};
/// use award_engine::config::ConfigLoader;
/// use award_engine::models::{Employee, EmploymentType};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("config/ma000018").unwrap();
/// let config = loader.config();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employment_type: EmploymentType::FullTime,
///     classification_code: "dce_level_3".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
///     employment_start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     base_hourly_rate: None,
///     tags: vec![],
/// };
///
/// let segment = ShiftSegment {
///     start_time: NaiveDateTime::parse_from_str("2026-01-18 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-18 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     day_type: DayType::Sunday,
///     hours: Decimal::from_str("8.0").unwrap(),
/// };
///
/// let result = calculate_sunday_pay(&segment, &employee, Decimal::from_str("28.54").unwrap(), config, 1);
/// // 8.0 hours * $28.54 * 1.75 = $399.56
/// assert_eq!(result.pay_line.amount, Decimal::from_str("399.56").unwrap());
/// assert_eq!(result.pay_line.category, award_engine::models::PayCategory::Sunday);
/// ```
pub fn calculate_sunday_pay(
    segment: &ShiftSegment,
    employee: &Employee,
    base_rate: Decimal,
    config: &AwardConfig,
    step_number: u32,
) -> SundayPayResult {
    let penalties = config.penalties();
    let sunday_penalties = &penalties.penalties.sunday;

    let (multiplier, category, clause_ref) = match employee.employment_type {
        EmploymentType::FullTime => (
            sunday_penalties.full_time,
            PayCategory::Sunday,
            "23.1".to_string(),
        ),
        EmploymentType::PartTime => (
            sunday_penalties.part_time,
            PayCategory::Sunday,
            "23.1".to_string(),
        ),
        EmploymentType::Casual => (
            sunday_penalties.casual,
            PayCategory::SundayCasual,
            "23.2(b)".to_string(),
        ),
    };

    let effective_rate = base_rate * multiplier;
    let amount = segment.hours * effective_rate;

    let employment_type_str = match employee.employment_type {
        EmploymentType::FullTime => "full_time",
        EmploymentType::PartTime => "part_time",
        EmploymentType::Casual => "casual",
    };

    let pay_line = PayLine {
        date: segment.start_time.date(),
        shift_id: String::new(), // Will be set by caller
        category,
        hours: segment.hours,
        rate: effective_rate,
        amount,
        clause_ref: clause_ref.clone(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "sunday_penalty".to_string(),
        rule_name: "Sunday Penalty Rate".to_string(),
        clause_ref,
        input: serde_json::json!({
            "hours": segment.hours.normalize().to_string(),
            "base_rate": base_rate.normalize().to_string(),
            "employment_type": employment_type_str,
            "day_type": "Sunday"
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "effective_rate": effective_rate.normalize().to_string(),
            "amount": amount.normalize().to_string(),
            "category": format!("{:?}", category)
        }),
        reasoning: format!(
            "Sunday penalty: {} hours × ${} × {} = ${}",
            segment.hours.normalize(),
            base_rate.normalize(),
            multiplier.normalize(),
            amount.normalize()
        ),
    };

    SundayPayResult {
        pay_line,
        audit_step,
    }
}
