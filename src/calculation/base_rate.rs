//! Base rate lookup functionality.
//!
//! This module provides functions for determining an employee's base hourly rate,
//! either from their employee override or from the award configuration.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::AwardConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, Employee};

/// The result of a base rate lookup, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct BaseRateLookupResult {
    /// The determined base hourly rate.
    pub rate: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Determines an employee's base hourly rate.
///
/// This function looks up the base rate for an employee based on the following priority:
/// 1. If `employee.base_hourly_rate` is `Some`, use that override value
/// 2. Otherwise, look up the rate from the config by classification code and effective date
///
/// # Arguments
///
/// * `employee` - The employee to look up the rate for
/// * `effective_date` - The date for which to find the applicable rate
/// * `config` - The award configuration containing classification rates
///
/// # Returns
///
/// Returns a `BaseRateLookupResult` containing the rate and an audit step, or an error if:
/// - The classification code is not found in the config (`ClassificationNotFound`)
/// - No rate exists for the classification on the effective date (`RateNotFound`)
///
/// # Award Reference
///
/// Clause 14.2 of the Aged Care Award 2010 defines classification rates.
///
/// # Examples
///
/// ```
/// use award_engine::calculation::get_base_rate;
/// use award_engine::models::Employee;
/// use chrono::NaiveDate;
/// ```
pub fn get_base_rate(
    employee: &Employee,
    effective_date: NaiveDate,
    config: &AwardConfig,
    step_number: u32,
) -> EngineResult<BaseRateLookupResult> {
    // Check if employee has an override rate
    if let Some(override_rate) = employee.base_hourly_rate {
        let audit_step = AuditStep {
            step_number,
            rule_id: "base_rate_lookup".to_string(),
            rule_name: "Base Rate Lookup".to_string(),
            clause_ref: "14.2".to_string(),
            input: serde_json::json!({
                "classification_code": employee.classification_code,
                "employee_override_rate": override_rate.to_string(),
                "effective_date": effective_date.to_string()
            }),
            output: serde_json::json!({
                "rate": override_rate.to_string(),
                "source": "employee_override"
            }),
            reasoning: format!(
                "Using employee override rate ${} instead of classification lookup",
                override_rate
            ),
        };

        return Ok(BaseRateLookupResult {
            rate: override_rate,
            audit_step,
        });
    }

    // Check if classification exists in config
    if !config
        .classifications()
        .contains_key(&employee.classification_code)
    {
        return Err(EngineError::ClassificationNotFound {
            code: employee.classification_code.clone(),
        });
    }

    // Find the applicable rate for the effective date
    // Rates are sorted by effective_date ascending, so we find the most recent
    // rate that is on or before the effective_date (searching from the end)
    let applicable_rate = config
        .rates()
        .iter()
        .rfind(|r| r.effective_date <= effective_date);

    match applicable_rate {
        Some(rate_config) => {
            // Check if the classification has a rate in this rate config
            match rate_config.rates.get(&employee.classification_code) {
                Some(classification_rate) => {
                    let rate = classification_rate.hourly;
                    let audit_step = AuditStep {
                        step_number,
                        rule_id: "base_rate_lookup".to_string(),
                        rule_name: "Base Rate Lookup".to_string(),
                        clause_ref: "14.2".to_string(),
                        input: serde_json::json!({
                            "classification_code": employee.classification_code,
                            "effective_date": effective_date.to_string()
                        }),
                        output: serde_json::json!({
                            "rate": rate.to_string(),
                            "source": "config",
                            "rate_effective_date": rate_config.effective_date.to_string()
                        }),
                        reasoning: format!(
                            "Looked up rate for classification '{}' effective {}: ${}",
                            employee.classification_code, rate_config.effective_date, rate
                        ),
                    };

                    Ok(BaseRateLookupResult { rate, audit_step })
                }
                None => Err(EngineError::RateNotFound {
                    classification: employee.classification_code.clone(),
                    date: effective_date,
                }),
            }
        }
        None => Err(EngineError::RateNotFound {
            classification: employee.classification_code.clone(),
            date: effective_date,
        }),
    }
}
