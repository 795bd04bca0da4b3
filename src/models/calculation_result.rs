//! Calculation result models for the Award Interpretation Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated structures
//! that capture all outputs from a pay calculation, including pay lines, allowances,
//! totals, and audit traces.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayPeriod;

/// Represents the category of pay for a pay line.
///
/// Different categories have different rates and are used to distinguish
/// between ordinary time, casual loading, weekend penalties, and overtime.
///
/// # Example
///
/// ```
/// use award_engine::models::PayCategory;
///
/// let category = PayCategory::Ordinary;
/// assert_eq!(format!("{:?}", category), "Ordinary");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Ordinary hours for permanent employees.
    Ordinary,
    /// Ordinary hours for casual employees (includes casual loading).
    OrdinaryCasual,
    /// Saturday penalty rates for permanent employees.
    Saturday,
    /// Saturday penalty rates for casual employees.
    SaturdayCasual,
    /// Sunday penalty rates for permanent employees.
    Sunday,
    /// Sunday penalty rates for casual employees.
    SundayCasual,
    /// Overtime at 150% rate.
    Overtime150,
    /// Overtime at 200% rate.
    Overtime200,
}

/// Represents a single line item in a pay calculation.
///
/// Each pay line captures the hours worked in a specific category,
/// the applicable rate, and the resulting amount.
///
/// # Example
///
/// ```
/// use award_engine::models::{PayLine, PayCategory};
/// use rust_decimal::Decimal;
/// use chrono::NaiveDate;
/// use std::str::FromStr;
///
/// let pay_line = PayLine {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     shift_id: "shift_001".to_string(),
///     category: PayCategory::Ordinary,
///     hours: Decimal::from_str("8.0").unwrap(),
///     rate: Decimal::from_str("28.54").unwrap(),
///     amount: Decimal::from_str("228.32").unwrap(),
///     clause_ref: "14.2".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayLine {
    /// The date this pay line applies to.
    pub date: NaiveDate,
    /// The ID of the shift this pay line originated from.
    pub shift_id: String,
    /// The category of pay (e.g., Ordinary, Overtime150).
    pub category: PayCategory,
    /// The number of hours worked in this category.
    pub hours: Decimal,
    /// The hourly rate for this category.
    pub rate: Decimal,
    /// The total amount for this pay line (hours * rate).
    pub amount: Decimal,
    /// Reference to the award clause that justifies this pay line.
    pub clause_ref: String,
}

/// Represents an allowance payment.
///
/// Allowances are additional payments for specific conditions or expenses,
/// such as laundry allowance or travel allowance.
///
/// # Example
///
/// ```
/// use award_engine::models::AllowancePayment;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let allowance = AllowancePayment {
///     allowance_type: "laundry".to_string(),
///     description: "Laundry allowance for uniform cleaning".to_string(),
///     units: Decimal::from_str("5.0").unwrap(),
///     rate: Decimal::from_str("0.32").unwrap(),
///     amount: Decimal::from_str("1.49").unwrap(),
///     clause_ref: "20.2".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowancePayment {
    /// The type of allowance (e.g., "laundry", "travel", "meal").
    #[serde(rename = "type")]
    pub allowance_type: String,
    /// A description of the allowance.
    pub description: String,
    /// The number of units (e.g., shifts, kilometers).
    pub units: Decimal,
    /// The rate per unit.
    pub rate: Decimal,
    /// The total amount for this allowance (may be capped).
    pub amount: Decimal,
    /// Reference to the award clause that justifies this allowance.
    pub clause_ref: String,
}

/// Aggregated totals for a pay calculation.
///
/// This struct provides a summary of all pay components, making it easy
/// to see the overall result of a calculation.
///
/// # Example
///
/// ```
/// use award_engine::models::PayTotals;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let totals = PayTotals {
///     gross_pay: Decimal::from_str("1500.00").unwrap(),
///     ordinary_hours: Decimal::from_str("38.0").unwrap(),
///     overtime_hours: Decimal::from_str("4.0").unwrap(),
///     penalty_hours: Decimal::from_str("8.0").unwrap(),
///     allowances_total: Decimal::from_str("5.60").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayTotals {
    /// The total gross pay (sum of all pay lines and allowances).
    pub gross_pay: Decimal,
    /// Total ordinary hours worked.
    pub ordinary_hours: Decimal,
    /// Total overtime hours worked.
    pub overtime_hours: Decimal,
    /// Total penalty hours worked (weekend/holiday).
    pub penalty_hours: Decimal,
    /// Total value of all allowances.
    pub allowances_total: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the award clause for this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every decision made during the calculation process for
/// transparency and compliance.
///
/// # Example
///
/// ```
/// use award_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 1234,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a pay calculation.
///
/// This struct captures all outputs from the award interpretation engine,
/// including pay lines, allowances, totals, and a complete audit trace
/// for transparency and compliance.
///
/// # Example
///
/// ```
/// use award_engine::models::{CalculationResult, PayPeriod, PayTotals, AuditTrace};
/// use chrono::{Utc, NaiveDate};
/// use uuid::Uuid;
/// use rust_decimal::Decimal;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     pay_period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///         public_holidays: vec![],
///     },
///     pay_lines: vec![],
///     allowances: vec![],
///     totals: PayTotals {
///         gross_pay: Decimal::ZERO,
///         ordinary_hours: Decimal::ZERO,
///         overtime_hours: Decimal::ZERO,
///         penalty_hours: Decimal::ZERO,
///         allowances_total: Decimal::ZERO,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         warnings: vec![],
///         duration_us: 0,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The pay period for this calculation.
    pub pay_period: PayPeriod,
    /// Individual pay lines making up the calculation.
    pub pay_lines: Vec<PayLine>,
    /// Allowance payments included in the calculation.
    pub allowances: Vec<AllowancePayment>,
    /// Aggregated totals for the calculation.
    pub totals: PayTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
