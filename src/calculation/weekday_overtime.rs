//! Weekday overtime rate calculation functionality.
//!
//! This module provides functions for calculating overtime pay at tiered rates
//! for weekday shifts as per the Aged Care Award 2010 clause 25.1.
//!
//! ## Rate Structure
//!
//! **Weekday overtime is calculated in two tiers:**
//! - First 2 hours: 150% for non-casuals, 187.5% for casuals (1.5 × 1.25)
//! - After 2 hours: 200% for non-casuals, 250% for casuals (2.0 × 1.25)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::AwardConfig;
use crate::models::{AuditStep, Employee, EmploymentType, PayCategory, PayLine};

/// The threshold in hours for tier 1 weekday overtime.
/// First 2 hours are paid at a lower rate (150%/187.5%).
pub const WEEKDAY_OT_TIER_1_THRESHOLD: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// The result of weekday overtime calculation.
///
/// Contains the pay lines for each tier of overtime and the audit steps
/// documenting the calculations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayOvertimeResult {
    /// Pay lines for overtime (may be 0, 1, or 2 lines depending on hours).
    pub pay_lines: Vec<PayLine>,
    /// Audit steps recording each tier calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates weekday overtime pay at tiered rates.
///
/// Weekday overtime is calculated in two tiers as per clause 25.1(a)(i)(A):
/// - **Tier 1 (first 2 hours):** 150% for non-casuals, 187.5% for casuals
/// - **Tier 2 (after 2 hours):** 200% for non-casuals, 250% for casuals
///
/// # Arguments
///
/// * `overtime_hours` - The total overtime hours to be paid
/// * `base_rate` - The base hourly rate (before any loading)
/// * `employee` - The employee receiving overtime pay
/// * `config` - The award configuration containing overtime multipliers
/// * `date` - The date of the shift for pay line records
/// * `shift_id` - The shift ID for pay line records
/// * `step_number_start` - The starting step number for audit trail sequencing
///
/// # Returns
///
/// A [`WeekdayOvertimeResult`] containing:
/// - `pay_lines`: 0-2 pay lines depending on overtime hours
/// - `audit_steps`: Documentation of each tier calculation
///
/// # Award Reference
///
/// - Clause 25.1(a)(i)(A): Weekday overtime rates
///
/// # Examples
///
/// ## 1 hour overtime (non-casual)
///
/// ```
/// use award_engine::calculation::calculate_weekday_overtime;
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
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let result = calculate_weekday_overtime(
///     Decimal::from_str("1.0").unwrap(),
///     Decimal::from_str("28.54").unwrap(),
///     &employee,
///     &config,
///     date,
///     "shift_001",
///     1,
/// );
///
/// assert_eq!(result.pay_lines.len(), 1);
/// assert_eq!(result.pay_lines[0].category, PayCategory::Overtime150);
/// ```
///
/// ## 3 hours overtime (non-casual, triggers both tiers)
///
/// ```
/// use award_engine::calculation::calculate_weekday_overtime;
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
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let result = calculate_weekday_overtime(
///     Decimal::from_str("3.0").unwrap(),
///     Decimal::from_str("28.54").unwrap(),
///     &employee,
///     &config,
///     date,
///     "shift_001",
///     1,
/// );
///
/// assert_eq!(result.pay_lines.len(), 2);
/// assert_eq!(result.pay_lines[0].category, PayCategory::Overtime150);
/// assert_eq!(result.pay_lines[1].category, PayCategory::Overtime200);
/// ```
pub fn calculate_weekday_overtime(
    overtime_hours: Decimal,
    base_rate: Decimal,
    employee: &Employee,
    config: &AwardConfig,
    date: NaiveDate,
    shift_id: &str,
    step_number_start: u32,
) -> WeekdayOvertimeResult {
    let mut pay_lines = Vec::new();
    let mut audit_steps = Vec::new();
    let mut step_number = step_number_start;

    // If no overtime, return empty result
    if overtime_hours <= Decimal::ZERO {
        return WeekdayOvertimeResult {
            pay_lines,
            audit_steps,
        };
    }

    // Get overtime rates from config
    let overtime_config = &config.penalties().overtime.weekday;

    // Get the multipliers based on employment type
    let (tier1_multiplier, tier2_multiplier) = match employee.employment_type {
        EmploymentType::FullTime => (
            overtime_config.first_two_hours.full_time,
            overtime_config.after_two_hours.full_time,
        ),
        EmploymentType::PartTime => (
            overtime_config.first_two_hours.part_time,
            overtime_config.after_two_hours.part_time,
        ),
        EmploymentType::Casual => (
            overtime_config.first_two_hours.casual,
            overtime_config.after_two_hours.casual,
        ),
    };

    let employment_type_str = match employee.employment_type {
        EmploymentType::FullTime => "full_time",
        EmploymentType::PartTime => "part_time",
        EmploymentType::Casual => "casual",
    };

    // Calculate tier 1 overtime (first 2 hours)
    let tier1_hours = if overtime_hours <= WEEKDAY_OT_TIER_1_THRESHOLD {
        overtime_hours
    } else {
        WEEKDAY_OT_TIER_1_THRESHOLD
    };

    if tier1_hours > Decimal::ZERO {
        let tier1_rate = base_rate * tier1_multiplier;
        let tier1_amount = tier1_hours * tier1_rate;

        let tier1_reasoning = if employee.is_casual() {
            format!(
                "First {} hours of weekday overtime at {}% ({}% × 1.25 casual loading): {} hours × ${} = ${}",
                tier1_hours.normalize(),
                (tier1_multiplier * Decimal::from(100)).normalize(),
                Decimal::from(150),
                tier1_hours.normalize(),
                tier1_rate.normalize(),
                tier1_amount.normalize()
            )
        } else {
            format!(
                "First {} hours of weekday overtime at {}%: {} hours × ${} = ${}",
                tier1_hours.normalize(),
                (tier1_multiplier * Decimal::from(100)).normalize(),
                tier1_hours.normalize(),
                tier1_rate.normalize(),
                tier1_amount.normalize()
            )
        };

        let tier1_audit = AuditStep {
            step_number,
            rule_id: "overtime_tier_1".to_string(),
            rule_name: "Weekday Overtime Tier 1".to_string(),
            clause_ref: "25.1(a)(i)(A)".to_string(),
            input: serde_json::json!({
                "hours": tier1_hours.normalize().to_string(),
                "base_rate": base_rate.normalize().to_string(),
                "employment_type": employment_type_str
            }),
            output: serde_json::json!({
                "multiplier": tier1_multiplier.normalize().to_string(),
                "rate": tier1_rate.normalize().to_string(),
                "amount": tier1_amount.normalize().to_string()
            }),
            reasoning: tier1_reasoning,
        };

        let tier1_pay_line = PayLine {
            date,
            shift_id: shift_id.to_string(),
            category: PayCategory::Overtime150,
            hours: tier1_hours,
            rate: tier1_rate,
            amount: tier1_amount,
            clause_ref: "25.1(a)(i)(A)".to_string(),
        };

        pay_lines.push(tier1_pay_line);
        audit_steps.push(tier1_audit);
        step_number += 1;
    }

    // Calculate tier 2 overtime (after 2 hours)
    let tier2_hours = if overtime_hours > WEEKDAY_OT_TIER_1_THRESHOLD {
        overtime_hours - WEEKDAY_OT_TIER_1_THRESHOLD
    } else {
        Decimal::ZERO
    };

    if tier2_hours > Decimal::ZERO {
        let tier2_rate = base_rate * tier2_multiplier;
        let tier2_amount = tier2_hours * tier2_rate;

        let tier2_reasoning = if employee.is_casual() {
            format!(
                "Overtime after first 2 hours at {}% ({}% × 1.25 casual loading): {} hours × ${} = ${}",
                (tier2_multiplier * Decimal::from(100)).normalize(),
                Decimal::from(200),
                tier2_hours.normalize(),
                tier2_rate.normalize(),
                tier2_amount.normalize()
            )
        } else {
            format!(
                "Overtime after first 2 hours at {}%: {} hours × ${} = ${}",
                (tier2_multiplier * Decimal::from(100)).normalize(),
                tier2_hours.normalize(),
                tier2_rate.normalize(),
                tier2_amount.normalize()
            )
        };

        let tier2_audit = AuditStep {
            step_number,
            rule_id: "overtime_tier_2".to_string(),
            rule_name: "Weekday Overtime Tier 2".to_string(),
            clause_ref: "25.1(a)(i)(A)".to_string(),
            input: serde_json::json!({
                "hours": tier2_hours.normalize().to_string(),
                "base_rate": base_rate.normalize().to_string(),
                "employment_type": employment_type_str
            }),
            output: serde_json::json!({
                "multiplier": tier2_multiplier.normalize().to_string(),
                "rate": tier2_rate.normalize().to_string(),
                "amount": tier2_amount.normalize().to_string()
            }),
            reasoning: tier2_reasoning,
        };

        let tier2_pay_line = PayLine {
            date,
            shift_id: shift_id.to_string(),
            category: PayCategory::Overtime200,
            hours: tier2_hours,
            rate: tier2_rate,
            amount: tier2_amount,
            clause_ref: "25.1(a)(i)(A)".to_string(),
        };

        pay_lines.push(tier2_pay_line);
        audit_steps.push(tier2_audit);
    }

    WeekdayOvertimeResult {
        pay_lines,
        audit_steps,
    }
}
