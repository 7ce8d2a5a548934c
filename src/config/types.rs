//! Rate schedule types.
//!
//! This module contains the strongly-typed rate schedule structures that
//! are deserialized from a YAML schedule file. The pay calculator takes the
//! schedule as an explicit parameter, so alternate rate tables can be tested
//! without touching the algorithm.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Premium multipliers applied to weekend hours.
#[derive(Debug, Clone, Deserialize)]
pub struct WeekendMultipliers {
    /// Multiplier applied to the base rate for Saturday hours.
    pub saturday: Decimal,
    /// Multiplier applied to the base rate for Sunday hours.
    pub sunday: Decimal,
}

/// Statutory-style deduction amounts withheld per block of hours worked.
///
/// Each amount is withheld once per `block_hours` worked, proportionally:
/// 6 hours at a 4-hour block withholds 1.5 times each amount.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionSchedule {
    /// The block size the per-block amounts apply to, in hours.
    pub block_hours: Decimal,
    /// CPP/QPP withheld per block.
    pub cpp_qpp: Decimal,
    /// Employment insurance withheld per block.
    pub employment_insurance: Decimal,
    /// Building fund contribution withheld per block.
    pub building_fund: Decimal,
}

/// The complete rate schedule used by the pay calculator.
///
/// # Example
///
/// ```
/// use shiftpay_engine::config::RateSchedule;
/// use rust_decimal::Decimal;
///
/// let schedule = RateSchedule::default();
/// assert_eq!(schedule.base_rate, Decimal::new(2328, 2)); // 23.28
/// assert_eq!(schedule.weekend.saturday, Decimal::new(15, 1)); // 1.5
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RateSchedule {
    /// The base hourly rate, in currency units per hour.
    pub base_rate: Decimal,
    /// Weekend premium multipliers.
    pub weekend: WeekendMultipliers,
    /// Per-block deduction amounts.
    pub deductions: DeductionSchedule,
}

impl Default for RateSchedule {
    /// The canonical schedule the shift tracker ships with.
    fn default() -> Self {
        Self {
            base_rate: Decimal::new(2328, 2),
            weekend: WeekendMultipliers {
                saturday: Decimal::new(15, 1),
                sunday: Decimal::new(20, 1),
            },
            deductions: DeductionSchedule {
                block_hours: Decimal::from(4),
                cpp_qpp: Decimal::new(157, 2),
                employment_insurance: Decimal::new(153, 2),
                building_fund: Decimal::new(100, 2),
            },
        }
    }
}

impl RateSchedule {
    /// Checks the schedule for values the calculator cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRate`] if `block_hours` is not strictly
    /// positive (it is a divisor) or if any rate or multiplier is negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.deductions.block_hours <= Decimal::ZERO {
            return Err(EngineError::InvalidRate {
                field: "deductions.block_hours".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }

        let non_negative = [
            ("base_rate", self.base_rate),
            ("weekend.saturday", self.weekend.saturday),
            ("weekend.sunday", self.weekend.sunday),
            ("deductions.cpp_qpp", self.deductions.cpp_qpp),
            (
                "deductions.employment_insurance",
                self.deductions.employment_insurance,
            ),
            ("deductions.building_fund", self.deductions.building_fund),
        ];

        for (field, value) in non_negative {
            if value < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }

        Ok(())
    }
}
