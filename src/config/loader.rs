//! Rate schedule loading functionality.
//!
//! This module provides the [`ScheduleLoader`] type for loading a rate
//! schedule from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::RateSchedule;

/// Loads and provides access to a rate schedule.
///
/// # File Structure
///
/// The schedule file is a single YAML document:
/// ```text
/// base_rate: "23.28"
/// weekend:
///   saturday: "1.5"
///   sunday: "2.0"
/// deductions:
///   block_hours: "4"
///   cpp_qpp: "1.57"
///   employment_insurance: "1.53"
///   building_fund: "1.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use shiftpay_engine::config::ScheduleLoader;
///
/// let loader = ScheduleLoader::load("./config/rates.yaml").unwrap();
/// println!("Base rate: ${}", loader.schedule().base_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleLoader {
    schedule: RateSchedule,
}

impl ScheduleLoader {
    /// Loads a rate schedule from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the schedule file (e.g., "./config/rates.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ScheduleLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML or is missing required fields
    /// - The schedule fails validation (zero block size, negative rates)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use shiftpay_engine::config::ScheduleLoader;
    ///
    /// let loader = ScheduleLoader::load("./config/rates.yaml")?;
    /// # Ok::<(), shiftpay_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let schedule: RateSchedule =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        schedule.validate()?;

        Ok(Self { schedule })
    }

    /// Returns the loaded rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }

    /// Consumes the loader and returns the schedule.
    pub fn into_schedule(self) -> RateSchedule {
        self.schedule
    }
}
