//! Day classification logic.
//!
//! This module provides the [`DayCategory`] type and the classification
//! function that decides which premium rate a shift's hours earn based on
//! its calendar date.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The pay category a calendar date falls into.
///
/// Saturday and Sunday hours earn premium rates; Monday through Friday
/// hours are paid at the base rate.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::DayCategory;
///
/// let category = DayCategory::Saturday;
/// assert_eq!(format!("{:?}", category), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// Monday through Friday - base rate applies.
    Regular,
    /// Saturday - the Saturday premium multiplier applies.
    Saturday,
    /// Sunday - the Sunday premium multiplier applies.
    Sunday,
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Regular => write!(f, "Regular"),
            DayCategory::Saturday => write!(f, "Saturday"),
            DayCategory::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the pay category for a given date.
///
/// The date is interpreted in local/naive terms with no timezone
/// conversion; matching on [`chrono::Weekday`] sidesteps the
/// Sunday-first versus Monday-first index conventions entirely.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::{day_category, DayCategory};
/// use chrono::NaiveDate;
///
/// // 2026-01-17 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 17).unwrap();
/// assert_eq!(day_category(saturday), DayCategory::Saturday);
///
/// // 2026-01-18 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
/// assert_eq!(day_category(sunday), DayCategory::Sunday);
///
/// // 2026-01-14 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(day_category(wednesday), DayCategory::Regular);
/// ```
pub fn day_category(date: NaiveDate) -> DayCategory {
    match date.weekday() {
        Weekday::Sat => DayCategory::Saturday,
        Weekday::Sun => DayCategory::Sunday,
        _ => DayCategory::Regular,
    }
}
