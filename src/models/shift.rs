//! Shift model and related types.
//!
//! This module defines the [`ShiftType`] tag and the [`ShiftRecord`] struct
//! that the pay calculator and analytics rollups consume.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The rostered block a shift belongs to.
///
/// Each shift type maps to a fixed start/end time and duration via
/// [`crate::calculation::shift_times`].
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::ShiftType;
///
/// let json = serde_json::to_string(&ShiftType::Night).unwrap();
/// assert_eq!(json, "\"night\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    /// Morning block, 06:30 to 14:30.
    Morning,
    /// Afternoon block, 14:30 to 22:30.
    Afternoon,
    /// Night block, 22:30 to 06:30 the next day.
    Night,
}

impl ShiftType {
    /// Parses a tag leniently, falling back to [`ShiftType::Morning`] for
    /// anything unrecognized.
    ///
    /// Unknown tags map to the morning entry instead of failing, matching
    /// how stored shift tags have historically been resolved. A typo
    /// silently produces morning hours, so new callers should prefer the
    /// strict [`FromStr`] implementation.
    ///
    /// # Example
    ///
    /// ```
    /// use shiftpay_engine::models::ShiftType;
    ///
    /// assert_eq!(ShiftType::from_tag("night"), ShiftType::Night);
    /// assert_eq!(ShiftType::from_tag("graveyard"), ShiftType::Morning);
    /// ```
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or(ShiftType::Morning)
    }

    /// Returns the lowercase tag for this shift type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ShiftType::Morning => "morning",
            ShiftType::Afternoon => "afternoon",
            ShiftType::Night => "night",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for ShiftType {
    type Err = EngineError;

    /// Parses a tag strictly, failing with [`EngineError::InvalidShiftType`]
    /// for anything other than `morning`, `afternoon`, or `night`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(ShiftType::Morning),
            "afternoon" => Ok(ShiftType::Afternoon),
            "night" => Ok(ShiftType::Night),
            other => Err(EngineError::InvalidShiftType {
                value: other.to_string(),
            }),
        }
    }
}

/// A recorded work shift.
///
/// This is the shape the pay calculator consumes. The calculator only reads
/// `date` and `hours`; `shift_type` is used by the shift-time resolver and
/// the analytics rollups.
///
/// `hours` is normally the fixed duration from the shift-time table, but the
/// calculator treats it as an arbitrary weight so partial shifts work too.
/// Negative values are not validated here and flow through the arithmetic;
/// rejecting them is the responsibility of whatever constructs the record.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::{ShiftRecord, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     shift_type: ShiftType::Morning,
///     hours: Decimal::from(8),
/// };
/// assert_eq!(shift.hours, Decimal::from(8));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// The calendar date the shift was worked, in local/naive terms.
    pub date: NaiveDate,
    /// The rostered block for the shift.
    pub shift_type: ShiftType,
    /// The duration attributed to the shift, in hours.
    pub hours: Decimal,
}
