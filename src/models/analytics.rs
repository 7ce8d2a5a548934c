//! Analytics summary models.
//!
//! This module contains the types produced by the analytics rollups:
//! totals, per-type shift counts, and weekly/monthly hour buckets for
//! chart rendering.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of shifts recorded per shift type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShiftTypeCounts {
    /// Number of morning shifts.
    pub morning: usize,
    /// Number of afternoon shifts.
    pub afternoon: usize,
    /// Number of night shifts.
    pub night: usize,
}

/// Hours worked in a single week, labeled by the week's start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekBucket {
    /// Label for the week, formatted as e.g. "Jan 12".
    pub week: String,
    /// Total hours worked in that week.
    pub hours: Decimal,
}

/// Hours worked in a single calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Label for the month, formatted as e.g. "Jan 2026".
    pub month: String,
    /// Total hours worked in that month.
    pub hours: Decimal,
}

/// Aggregate view of a user's recorded shifts.
///
/// Produced by [`crate::calculation::summarize`]. Weeks start on Monday;
/// the weekly and monthly bucket lists are ordered oldest first and always
/// contain 8 and 6 entries respectively, with zero-hour entries for periods
/// without shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Total hours across all recorded shifts.
    pub total_hours: Decimal,
    /// Total number of recorded shifts.
    pub total_shifts: usize,
    /// Shift counts broken down by type.
    pub shifts_by_type: ShiftTypeCounts,
    /// Hours worked in the current week (Monday through Sunday).
    pub weekly_hours: Decimal,
    /// Hours worked in the current calendar month.
    pub monthly_hours: Decimal,
    /// Hours per week for the last 8 weeks, oldest first.
    pub hours_by_week: Vec<WeekBucket>,
    /// Hours per month for the last 6 months, oldest first.
    pub hours_by_month: Vec<MonthBucket>,
}
