//! Analytics rollups.
//!
//! This module aggregates a user's shifts into the summary the dashboard
//! renders: totals, per-type counts, and trailing weekly/monthly hour
//! buckets. Pure grouping and summation; the caller supplies the reference
//! date so results are reproducible.

use chrono::{Datelike, Duration, Months, NaiveDate};
use rust_decimal::Decimal;

use crate::models::{
    AnalyticsSummary, MonthBucket, ShiftRecord, ShiftType, ShiftTypeCounts, WeekBucket,
};

/// Number of trailing weeks in the weekly chart, current week included.
pub const WEEK_BUCKETS: usize = 8;

/// Number of trailing months in the monthly chart, current month included.
pub const MONTH_BUCKETS: usize = 6;

/// Returns the Monday on or before the given date.
fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Returns the first day of the given date's month.
fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Sums the hours of shifts dated within `[start, end]` inclusive.
fn hours_between(shifts: &[ShiftRecord], start: NaiveDate, end: NaiveDate) -> Decimal {
    shifts
        .iter()
        .filter(|shift| shift.date >= start && shift.date <= end)
        .map(|shift| shift.hours)
        .sum()
}

/// Aggregates shifts into an analytics summary relative to `today`.
///
/// Weeks run Monday through Sunday. The weekly chart covers the last
/// [`WEEK_BUCKETS`] weeks and the monthly chart the last [`MONTH_BUCKETS`]
/// calendar months, both ordered oldest first and padded with zero-hour
/// buckets where nothing was worked.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::summarize;
/// use shiftpay_engine::models::{ShiftRecord, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let shifts = vec![ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     shift_type: ShiftType::Night,
///     hours: Decimal::from(8),
/// }];
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let summary = summarize(&shifts, today);
/// assert_eq!(summary.total_shifts, 1);
/// assert_eq!(summary.weekly_hours, Decimal::from(8));
/// assert_eq!(summary.shifts_by_type.night, 1);
/// ```
pub fn summarize(shifts: &[ShiftRecord], today: NaiveDate) -> AnalyticsSummary {
    let total_hours: Decimal = shifts.iter().map(|shift| shift.hours).sum();
    let total_shifts = shifts.len();

    let mut shifts_by_type = ShiftTypeCounts::default();
    for shift in shifts {
        match shift.shift_type {
            ShiftType::Morning => shifts_by_type.morning += 1,
            ShiftType::Afternoon => shifts_by_type.afternoon += 1,
            ShiftType::Night => shifts_by_type.night += 1,
        }
    }

    let current_week_start = week_start(today);
    let current_month_start = month_start(today);

    let hours_by_week: Vec<WeekBucket> = (0..WEEK_BUCKETS)
        .rev()
        .map(|weeks_back| {
            let start = current_week_start - Duration::weeks(weeks_back as i64);
            let end = start + Duration::days(6);
            WeekBucket {
                week: start.format("%b %-d").to_string(),
                hours: hours_between(shifts, start, end),
            }
        })
        .collect();

    let hours_by_month: Vec<MonthBucket> = (0..MONTH_BUCKETS)
        .rev()
        .map(|months_back| {
            let start = current_month_start
                .checked_sub_months(Months::new(months_back as u32))
                .expect("month subtraction stays in range");
            let end = start
                .checked_add_months(Months::new(1))
                .expect("month addition stays in range")
                - Duration::days(1);
            MonthBucket {
                month: start.format("%b %Y").to_string(),
                hours: hours_between(shifts, start, end),
            }
        })
        .collect();

    let weekly_hours = hours_between(
        shifts,
        current_week_start,
        current_week_start + Duration::days(6),
    );
    let month_end = current_month_start
        .checked_add_months(Months::new(1))
        .expect("month addition stays in range")
        - Duration::days(1);
    let monthly_hours = hours_between(shifts, current_month_start, month_end);

    AnalyticsSummary {
        total_hours,
        total_shifts,
        shifts_by_type,
        weekly_hours,
        monthly_hours,
        hours_by_week,
        hours_by_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_shift(date_str: &str, shift_type: ShiftType, hours: &str) -> ShiftRecord {
        ShiftRecord {
            date: NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
            shift_type,
            hours: dec(hours),
        }
    }

    /// Reference date for most tests: Thursday 2026-01-15.
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_week_start_is_monday() {
        assert_eq!(
            week_start(today()),
            NaiveDate::from_ymd_opt(2026, 1, 12).unwrap()
        );
        // A Monday is its own week start
        let monday = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();
        assert_eq!(week_start(monday), monday);
        // A Sunday belongs to the week that started 6 days earlier
        let sunday = NaiveDate::from_ymd_opt(2026, 1, 18).unwrap();
        assert_eq!(week_start(sunday), monday);
    }

    #[test]
    fn test_empty_input_produces_zeroed_summary() {
        let summary = summarize(&[], today());

        assert_eq!(summary.total_hours, Decimal::ZERO);
        assert_eq!(summary.total_shifts, 0);
        assert_eq!(summary.shifts_by_type, ShiftTypeCounts::default());
        assert_eq!(summary.weekly_hours, Decimal::ZERO);
        assert_eq!(summary.monthly_hours, Decimal::ZERO);
        assert_eq!(summary.hours_by_week.len(), WEEK_BUCKETS);
        assert_eq!(summary.hours_by_month.len(), MONTH_BUCKETS);
        assert!(summary.hours_by_week.iter().all(|b| b.hours.is_zero()));
        assert!(summary.hours_by_month.iter().all(|b| b.hours.is_zero()));
    }

    #[test]
    fn test_totals_and_type_counts() {
        let shifts = vec![
            make_shift("2026-01-12", ShiftType::Morning, "8"),
            make_shift("2026-01-13", ShiftType::Morning, "8"),
            make_shift("2026-01-14", ShiftType::Afternoon, "8"),
            make_shift("2026-01-06", ShiftType::Night, "6.5"),
        ];

        let summary = summarize(&shifts, today());
        assert_eq!(summary.total_hours, dec("30.5"));
        assert_eq!(summary.total_shifts, 4);
        assert_eq!(summary.shifts_by_type.morning, 2);
        assert_eq!(summary.shifts_by_type.afternoon, 1);
        assert_eq!(summary.shifts_by_type.night, 1);
    }

    #[test]
    fn test_weekly_hours_covers_monday_through_sunday() {
        let shifts = vec![
            // Current week: Mon 12th through Sun 18th
            make_shift("2026-01-12", ShiftType::Morning, "8"),
            make_shift("2026-01-18", ShiftType::Morning, "8"),
            // Previous week
            make_shift("2026-01-11", ShiftType::Morning, "8"),
        ];

        let summary = summarize(&shifts, today());
        assert_eq!(summary.weekly_hours, dec("16"));
    }

    #[test]
    fn test_monthly_hours_covers_calendar_month() {
        let shifts = vec![
            make_shift("2026-01-01", ShiftType::Morning, "8"),
            make_shift("2026-01-31", ShiftType::Morning, "8"),
            make_shift("2025-12-31", ShiftType::Morning, "8"),
        ];

        let summary = summarize(&shifts, today());
        assert_eq!(summary.monthly_hours, dec("16"));
        assert_eq!(summary.total_hours, dec("24"));
    }

    #[test]
    fn test_week_buckets_ordered_oldest_first_with_labels() {
        let shifts = vec![
            make_shift("2026-01-14", ShiftType::Morning, "8"),
            make_shift("2026-01-07", ShiftType::Morning, "6"),
        ];

        let summary = summarize(&shifts, today());
        assert_eq!(summary.hours_by_week.len(), WEEK_BUCKETS);

        // Last bucket is the current week (starts Mon Jan 12)
        let current = summary.hours_by_week.last().unwrap();
        assert_eq!(current.week, "Jan 12");
        assert_eq!(current.hours, dec("8"));

        // Second to last is the week of Jan 5
        let previous = &summary.hours_by_week[WEEK_BUCKETS - 2];
        assert_eq!(previous.week, "Jan 5");
        assert_eq!(previous.hours, dec("6"));

        // Oldest bucket is 7 weeks back from Jan 12: Nov 24
        assert_eq!(summary.hours_by_week[0].week, "Nov 24");
    }

    #[test]
    fn test_month_buckets_ordered_oldest_first_with_labels() {
        let shifts = vec![
            make_shift("2026-01-14", ShiftType::Morning, "8"),
            make_shift("2025-12-05", ShiftType::Night, "8"),
            make_shift("2025-08-20", ShiftType::Morning, "4"),
        ];

        let summary = summarize(&shifts, today());
        assert_eq!(summary.hours_by_month.len(), MONTH_BUCKETS);

        let labels: Vec<&str> = summary
            .hours_by_month
            .iter()
            .map(|b| b.month.as_str())
            .collect();
        assert_eq!(
            labels,
            vec![
                "Aug 2025", "Sep 2025", "Oct 2025", "Nov 2025", "Dec 2025", "Jan 2026"
            ]
        );

        assert_eq!(summary.hours_by_month[0].hours, dec("4"));
        assert_eq!(summary.hours_by_month[4].hours, dec("8"));
        assert_eq!(summary.hours_by_month[5].hours, dec("8"));
    }

    #[test]
    fn test_shifts_outside_all_windows_still_count_in_totals() {
        let shifts = vec![make_shift("2024-06-01", ShiftType::Morning, "8")];

        let summary = summarize(&shifts, today());
        assert_eq!(summary.total_hours, dec("8"));
        assert_eq!(summary.total_shifts, 1);
        assert!(summary.hours_by_week.iter().all(|b| b.hours.is_zero()));
        assert!(summary.hours_by_month.iter().all(|b| b.hours.is_zero()));
    }

    #[test]
    fn test_month_window_handles_year_boundary() {
        // Reference date in February: window reaches back to September
        let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let summary = summarize(&[], today);

        assert_eq!(summary.hours_by_month[0].month, "Sep 2025");
        assert_eq!(summary.hours_by_month[5].month, "Feb 2026");
    }
}
