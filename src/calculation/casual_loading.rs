//! Casual loading calculation functionality.
//!
//! This module provides functions for applying the casual loading multiplier
//! to base rates for casual employees as per the Aged Care Award 2010.

use rust_decimal::Decimal;

use crate::models::{AuditStep, Employee, EmploymentType};

/// Returns the casual loading multiplier as defined in clause 10.4(b).
///
/// The multiplier is 1.25 (25% loading).
pub fn casual_loading_multiplier() -> Decimal {
    Decimal::new(125, 2)
}

/// The result of applying casual loading, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct CasualLoadingResult {
    /// The rate after applying casual loading (if applicable).
    pub loaded_rate: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Applies casual loading to a base rate for casual employees.
///
/// For casual employees, a 25% loading is applied to the base rate as per
/// clause 10.4(b) of the Aged Care Award 2010. For full-time and part-time
/// employees, the base rate is returned unchanged.
///
/// # Arguments
///
/// * `base_rate` - The base hourly rate before any loading
/// * `employee` - The employee to apply loading for
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `CasualLoadingResult` containing the loaded rate and an audit step.
///
/// # Award Reference
///
/// Clause 10.4(b) of the Aged Care Award 2010 specifies the 25% casual loading.
///
/// # Examples
///
/// ```
/// use award_engine::calculation::apply_casual_loading;
/// use award_engine::models::{Employee, EmploymentType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employment_type: EmploymentType::Casual,
///     classification_code: "dce_level_3".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 15).unwrap(),
///     employment_start_date: NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(),
///     base_hourly_rate: None,
///     tags: vec![],
/// };
///
/// let result = apply_casual_loading(Decimal::from_str("28.54").unwrap(), &employee, 1);
/// assert_eq!(result.loaded_rate, Decimal::from_str("35.675").unwrap());
/// ```
pub fn apply_casual_loading(
    base_rate: Decimal,
    employee: &Employee,
    step_number: u32,
) -> CasualLoadingResult {
    let employment_type_str = match employee.employment_type {
        EmploymentType::FullTime => "full_time",
        EmploymentType::PartTime => "part_time",
        EmploymentType::Casual => "casual",
    };

    if employee.is_casual() {
        let loaded_rate = base_rate * casual_loading_multiplier();
        let multiplier = casual_loading_multiplier();

        let audit_step = AuditStep {
            step_number,
            rule_id: "casual_loading".to_string(),
            rule_name: "Casual Loading".to_string(),
            clause_ref: "10.4(b)".to_string(),
            input: serde_json::json!({
                "base_rate": base_rate.normalize().to_string(),
                "employment_type": employment_type_str
            }),
            output: serde_json::json!({
                "loaded_rate": loaded_rate.normalize().to_string(),
                "loading_applied": true,
                "multiplier": multiplier.normalize().to_string()
            }),
            reasoning: format!(
                "${} x {} = ${}",
                base_rate.normalize(),
                multiplier.normalize(),
                loaded_rate.normalize()
            ),
        };

        CasualLoadingResult {
            loaded_rate,
            audit_step,
        }
    } else {
        let audit_step = AuditStep {
            step_number,
            rule_id: "casual_loading".to_string(),
            rule_name: "Casual Loading".to_string(),
            clause_ref: "10.4(b)".to_string(),
            input: serde_json::json!({
                "base_rate": base_rate.to_string(),
                "employment_type": employment_type_str
            }),
            output: serde_json::json!({
                "loaded_rate": base_rate.to_string(),
                "loading_applied": false
            }),
            reasoning: format!(
                "No casual loading applied - employee is {} (not casual)",
                employment_type_str
            ),
        };

        CasualLoadingResult {
            loaded_rate: base_rate,
            audit_step,
        }
    }
}
