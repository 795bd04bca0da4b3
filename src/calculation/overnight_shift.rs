//! Overnight shift calculation functionality.
//!
//! This module provides functions for calculating pay for shifts that span
//! midnight and cross into different days with different penalty rates.
//! Per the Aged Care Award 2010, overnight shifts must be segmented at
//! midnight boundaries with each segment receiving the appropriate rate.

use rust_decimal::Decimal;

use crate::config::AwardConfig;
use crate::error::EngineResult;
use crate::models::{AuditStep, Employee, EmploymentType, PayCategory, PayLine, Shift};

use super::base_rate::get_base_rate;
use super::casual_loading::apply_casual_loading;
use super::day_detection::{segment_by_day, DayType, ShiftSegment};
use super::saturday_penalty::calculate_saturday_pay;
use super::sunday_penalty::calculate_sunday_pay;

/// The result of an overnight shift calculation, including multiple pay lines and audit steps.
///
/// For shifts spanning multiple days, this result contains a pay line for each day segment
/// with the appropriate penalty rate applied.
#[derive(Debug, Clone)]
pub struct OvernightShiftResult {
    /// The pay lines for each segment of the overnight shift.
    pub pay_lines: Vec<PayLine>,
    /// The audit steps recording this calculation, including segmentation and per-segment calculations.
    pub audit_steps: Vec<AuditStep>,
    /// The total amount across all segments.
    pub total_amount: Decimal,
}

/// Calculates pay for a shift that may span midnight and cross day boundaries.
///
/// This function:
/// 1. Looks up the base rate for the employee
/// 2. Segments the shift at midnight boundaries using [`segment_by_day`]
/// 3. Applies the correct penalty rate to each segment based on day type:
///    - Weekday: ordinary time (with casual loading for casuals)
///    - Saturday: 150% for non-casuals, 175% for casuals (clause 23.1, 23.2(a))
///    - Sunday: 175% for non-casuals, 200% for casuals (clause 23.1, 23.2(b))
/// 4. Generates audit trail showing segmentation and per-segment calculations
///
/// # Arguments
///
/// * `shift` - The shift to calculate pay for
/// * `employee` - The employee who worked the shift
/// * `config` - The award configuration containing rates and penalties
/// * `start_step_number` - The starting step number for audit trail sequencing
///
/// # Returns
///
/// Returns an `OvernightShiftResult` containing pay lines for each segment and audit steps,
/// or an error if the base rate lookup fails.
///
/// # Award Reference
///
/// - Clause 22.1: Ordinary hours
/// - Clause 23.1: Weekend penalties for permanent employees
/// - Clause 23.2(a): Saturday penalty for casuals (175%)
/// - Clause 23.2(b): Sunday penalty for casuals (200%)
///
/// # Examples
///
/// ```no_run
/// use award_engine::calculation::calculate_overnight_shift;
/// use award_engine::config::ConfigLoader;
/// use award_engine::models::{Employee, EmploymentType, Shift};
/// use chrono::{NaiveDate, NaiveDateTime};
///
/// let loader = ConfigLoader::load("config/ma000018").unwrap();
/// let config = loader.config();
///
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
/// // Saturday 22:00 to Sunday 06:00 shift
/// let shift = Shift {
///     id: "shift_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
///     start_time: NaiveDateTime::parse_from_str("2026-01-17 22:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     end_time: NaiveDateTime::parse_from_str("2026-01-18 06:00:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     breaks: vec![],
/// };
///
/// let result = calculate_overnight_shift(&shift, &employee, config, 1).unwrap();
/// // Result contains two pay lines: one for Saturday hours, one for Sunday hours
/// assert_eq!(result.pay_lines.len(), 2);
/// ```
pub fn calculate_overnight_shift(
    shift: &Shift,
    employee: &Employee,
    config: &AwardConfig,
    start_step_number: u32,
) -> EngineResult<OvernightShiftResult> {
    let mut audit_steps = Vec::new();
    let mut current_step = start_step_number;

    // Step 1: Look up base rate
    let base_rate_result = get_base_rate(employee, shift.date, config, current_step)?;
    let base_rate = base_rate_result.rate;
    audit_steps.push(base_rate_result.audit_step);
    current_step += 1;

    // Step 2: Segment the shift by day boundaries
    let segments = segment_by_day(shift);

    // Create audit step for segmentation
    let segment_descriptions: Vec<serde_json::Value> = segments
        .iter()
        .map(|s| {
            serde_json::json!({
                "day_type": format!("{}", s.day_type),
                "hours": s.hours.normalize().to_string(),
                "start_time": s.start_time.to_string(),
                "end_time": s.end_time.to_string()
            })
        })
        .collect();

    let segmentation_step = AuditStep {
        step_number: current_step,
        rule_id: "shift_segmentation".to_string(),
        rule_name: "Shift Day Segmentation".to_string(),
        clause_ref: "23".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "start_time": shift.start_time.to_string(),
            "end_time": shift.end_time.to_string(),
            "total_hours": shift.worked_hours().normalize().to_string()
        }),
        output: serde_json::json!({
            "segment_count": segments.len(),
            "segments": segment_descriptions
        }),
        reasoning: if segments.len() == 1 {
            format!(
                "Shift is entirely within {} - no midnight crossing",
                segments[0].day_type
            )
        } else {
            format!(
                "Shift crosses midnight: split into {} segments ({})",
                segments.len(),
                segments
                    .iter()
                    .map(|s| format!("{}: {}h", s.day_type, s.hours.normalize()))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
    };
    audit_steps.push(segmentation_step);
    current_step += 1;

    // Step 3: Calculate pay for each segment
    let mut pay_lines = Vec::new();
    let mut total_amount = Decimal::ZERO;

    for segment in &segments {
        let (mut pay_line, segment_audit) =
            calculate_segment_pay(segment, employee, base_rate, config, current_step)?;

        // Set the shift_id on the pay line
        pay_line.shift_id = shift.id.clone();

        total_amount += pay_line.amount;
        pay_lines.push(pay_line);
        audit_steps.push(segment_audit);
        current_step += 1;
    }

    // Step 4: Create summary audit step
    let summary_step = AuditStep {
        step_number: current_step,
        rule_id: "overnight_shift_total".to_string(),
        rule_name: "Overnight Shift Total Calculation".to_string(),
        clause_ref: "23".to_string(),
        input: serde_json::json!({
            "shift_id": shift.id,
            "segment_count": pay_lines.len(),
            "segment_amounts": pay_lines.iter().map(|p| p.amount.normalize().to_string()).collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "total_amount": total_amount.normalize().to_string(),
            "total_hours": shift.worked_hours().normalize().to_string()
        }),
        reasoning: format!(
            "Total overnight shift pay: {} segment(s) = ${}",
            pay_lines.len(),
            total_amount.normalize()
        ),
    };
    audit_steps.push(summary_step);

    Ok(OvernightShiftResult {
        pay_lines,
        audit_steps,
        total_amount,
    })
}

/// Calculates pay for a single shift segment based on its day type.
///
/// Returns the pay line and audit step for the segment.
fn calculate_segment_pay(
    segment: &ShiftSegment,
    employee: &Employee,
    base_rate: Decimal,
    config: &AwardConfig,
    step_number: u32,
) -> EngineResult<(PayLine, AuditStep)> {
    match segment.day_type {
        DayType::Saturday => {
            let result = calculate_saturday_pay(segment, employee, base_rate, config, step_number);
            Ok((result.pay_line, result.audit_step))
        }
        DayType::Sunday => {
            let result = calculate_sunday_pay(segment, employee, base_rate, config, step_number);
            Ok((result.pay_line, result.audit_step))
        }
        DayType::Weekday => {
            // For weekday segments, apply ordinary time with casual loading if applicable
            let casual_result = apply_casual_loading(base_rate, employee, step_number);
            let effective_rate = casual_result.loaded_rate;
            let amount = segment.hours * effective_rate;

            let (category, clause_ref) = match employee.employment_type {
                EmploymentType::Casual => (PayCategory::OrdinaryCasual, "10.4(b), 22.1"),
                EmploymentType::FullTime | EmploymentType::PartTime => {
                    (PayCategory::Ordinary, "22.1")
                }
            };

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
                clause_ref: clause_ref.to_string(),
            };

            let audit_step = AuditStep {
                step_number,
                rule_id: "weekday_ordinary".to_string(),
                rule_name: "Weekday Ordinary Time".to_string(),
                clause_ref: clause_ref.to_string(),
                input: serde_json::json!({
                    "hours": segment.hours.normalize().to_string(),
                    "base_rate": base_rate.normalize().to_string(),
                    "employment_type": employment_type_str,
                    "day_type": "Weekday"
                }),
                output: serde_json::json!({
                    "effective_rate": effective_rate.normalize().to_string(),
                    "amount": amount.normalize().to_string(),
                    "category": format!("{:?}", category)
                }),
                reasoning: format!(
                    "Weekday ordinary time: {} hours × ${} = ${}",
                    segment.hours.normalize(),
                    effective_rate.normalize(),
                    amount.normalize()
                ),
            };

            Ok((pay_line, audit_step))
        }
    }
}
