//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading award
//! configurations from YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentType;

use super::types::{
    AwardConfig, AwardMetadata, Classification, ClassificationsConfig, PenaltyConfig, RateConfig,
};

/// Loads and provides access to award configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and provides methods to query classifications, rates, and penalties.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ma000018/
/// ├── award.yaml          # Award metadata
/// ├── classifications.yaml # Employee classifications
/// ├── penalties.yaml       # Penalty and overtime rates
/// └── rates/
///     └── 2025-07-01.yaml  # Rates effective from this date
/// ```
///
/// # Example
///
/// ```no_run
/// use award_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/ma000018").unwrap();
///
/// // Get a classification
/// let classification = loader.get_classification("dce_level_3").unwrap();
/// println!("Classification: {}", classification.name);
///
/// // Get the hourly rate for a classification on a specific date
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// let rate = loader.get_hourly_rate("dce_level_3", date).unwrap();
/// println!("Hourly rate: ${}", rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AwardConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ma000018")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any required field is missing from the configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use award_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ma000018")?;
    /// # Ok::<(), award_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load award.yaml
        let award_path = path.join("award.yaml");
        let metadata = Self::load_yaml::<AwardMetadata>(&award_path)?;

        // Load classifications.yaml
        let classifications_path = path.join("classifications.yaml");
        let classifications_config =
            Self::load_yaml::<ClassificationsConfig>(&classifications_path)?;

        // Load penalties.yaml
        let penalties_path = path.join("penalties.yaml");
        let penalties = Self::load_yaml::<PenaltyConfig>(&penalties_path)?;

        // Load all rate files from the rates directory
        let rates_dir = path.join("rates");
        let rates = Self::load_rates(&rates_dir)?;

        let config = AwardConfig::new(
            metadata,
            classifications_config.classifications,
            rates,
            penalties,
        );

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<RateConfig>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let rate_config = Self::load_yaml::<RateConfig>(&path)?;
                rates.push(rate_config);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the underlying award configuration.
    pub fn config(&self) -> &AwardConfig {
        &self.config
    }

    /// Returns the award metadata.
    pub fn award(&self) -> &AwardMetadata {
        self.config.award()
    }

    /// Gets a classification by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The classification code (e.g., "dce_level_3")
    ///
    /// # Returns
    ///
    /// Returns the classification if found, or `ClassificationNotFound` error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use award_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/ma000018")?;
    /// let classification = loader.get_classification("dce_level_3")?;
    /// println!("Classification: {}", classification.name);
    /// # Ok::<(), award_engine::error::EngineError>(())
    /// ```
    pub fn get_classification(&self, code: &str) -> EngineResult<&Classification> {
        self.config
            .classifications()
            .get(code)
            .ok_or_else(|| EngineError::ClassificationNotFound {
                code: code.to_string(),
            })
    }

    /// Gets the hourly rate for a classification on a given date.
    ///
    /// The method finds the most recent rate configuration that is effective
    /// on or before the given date.
    ///
    /// # Arguments
    ///
    /// * `classification` - The classification code
    /// * `date` - The date for which to get the rate
    ///
    /// # Returns
    ///
    /// Returns the hourly rate if found, or an error if:
    /// - The classification is not found in any rate configuration
    /// - No rate configuration is effective for the given date
    ///
    /// # Example
    ///
    /// ```no_run
    /// use award_engine::config::ConfigLoader;
    /// use chrono::NaiveDate;
    ///
    /// let loader = ConfigLoader::load("./config/ma000018")?;
    /// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    /// let rate = loader.get_hourly_rate("dce_level_3", date)?;
    /// println!("Hourly rate: ${}", rate);
    /// # Ok::<(), award_engine::error::EngineError>(())
    /// ```
    pub fn get_hourly_rate(&self, classification: &str, date: NaiveDate) -> EngineResult<Decimal> {
        // Find the most recent rate config that is effective on or before the date
        let rate_config = self
            .config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .ok_or_else(|| EngineError::RateNotFound {
                classification: classification.to_string(),
                date,
            })?;

        rate_config
            .rates
            .get(classification)
            .map(|r| r.hourly)
            .ok_or_else(|| EngineError::RateNotFound {
                classification: classification.to_string(),
                date,
            })
    }

    /// Gets the penalty rate multiplier for a day type and employment type.
    ///
    /// # Arguments
    ///
    /// * `day_type` - The type of day ("saturday" or "sunday")
    /// * `employment_type` - The employee's employment type
    ///
    /// # Returns
    ///
    /// Returns the penalty multiplier (e.g., 1.5 for 150% of base rate).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use award_engine::config::ConfigLoader;
    /// use award_engine::models::EmploymentType;
    ///
    /// let loader = ConfigLoader::load("./config/ma000018")?;
    /// let penalty = loader.get_penalty("saturday", EmploymentType::Casual)?;
    /// println!("Saturday casual penalty: {}x", penalty);
    /// # Ok::<(), award_engine::error::EngineError>(())
    /// ```
    pub fn get_penalty(
        &self,
        day_type: &str,
        employment_type: EmploymentType,
    ) -> EngineResult<Decimal> {
        let penalties = &self.config.penalties().penalties;

        let penalty_rates = match day_type.to_lowercase().as_str() {
            "saturday" => &penalties.saturday,
            "sunday" => &penalties.sunday,
            _ => {
                return Err(EngineError::CalculationError {
                    message: format!("Unknown day type: {}", day_type),
                });
            }
        };

        Ok(match employment_type {
            EmploymentType::FullTime => penalty_rates.full_time,
            EmploymentType::PartTime => penalty_rates.part_time,
            EmploymentType::Casual => penalty_rates.casual,
        })
    }

    /// Gets the allowance rates from the most recent rate configuration.
    pub fn get_allowance_rates(&self, date: NaiveDate) -> EngineResult<(Decimal, Decimal)> {
        let rate_config = self
            .config
            .rates()
            .iter()
            .rev()
            .find(|rc| rc.effective_date <= date)
            .ok_or_else(|| EngineError::ConfigNotFound {
                path: "No rate configuration found for date".to_string(),
            })?;

        Ok((
            rate_config.allowances.laundry_per_shift,
            rate_config.allowances.laundry_per_week,
        ))
    }
}
