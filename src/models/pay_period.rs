//! Pay period and public holiday models.
//!
//! This module contains the [`PayPeriod`] and [`PublicHoliday`] types used to define
//! the calculation context for pay calculations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents a public holiday within a pay period.
///
/// Public holidays affect penalty rates and are tracked per region
/// to support state-specific holidays in Australia.
///
/// # Example
///
/// ```
/// use award_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Australia Day".to_string(),
///     region: "national".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday (e.g., "Australia Day").
    pub name: String,
    /// The region where this holiday applies (e.g., "national", "VIC", "NSW").
    pub region: String,
}

/// Represents a pay period with its date range and associated public holidays.
///
/// A pay period defines the time window for pay calculations and includes
/// information about any public holidays that fall within the period.
///
/// # Example
///
/// ```
/// use award_engine::models::{PayPeriod, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let pay_period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     public_holidays: vec![
///         PublicHoliday {
///             date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///             name: "Australia Day".to_string(),
///             region: "national".to_string(),
///         }
///     ],
/// };
///
/// assert!(pay_period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
/// assert!(pay_period.is_public_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
    /// Public holidays that fall within this pay period.
    pub public_holidays: Vec<PublicHoliday>,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to check.
    ///
    /// # Returns
    ///
    /// `true` if the date is within the pay period (inclusive), `false` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use award_engine::models::PayPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
    ///     public_holidays: vec![],
    /// };
    ///
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 13).unwrap())); // start date
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 20).unwrap())); // middle
    /// assert!(period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap())); // end date
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap())); // before
    /// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2026, 1, 27).unwrap())); // after
    /// ```
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Checks if a given date is a public holiday within this pay period.
    ///
    /// # Arguments
    ///
    /// * `date` - The date to check.
    ///
    /// # Returns
    ///
    /// `true` if the date matches any public holiday in the pay period, `false` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// use award_engine::models::{PayPeriod, PublicHoliday};
    /// use chrono::NaiveDate;
    ///
    /// let period = PayPeriod {
    ///     start_date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
    ///     public_holidays: vec![
    ///         PublicHoliday {
    ///             date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
    ///             name: "Australia Day".to_string(),
    ///             region: "national".to_string(),
    ///         }
    ///     ],
    /// };
    ///
    /// assert!(period.is_public_holiday(NaiveDate::from_ymd_opt(2026, 1, 26).unwrap()));
    /// assert!(!period.is_public_holiday(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
    /// ```
    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        self.public_holidays.iter().any(|h| h.date == date)
    }
}
