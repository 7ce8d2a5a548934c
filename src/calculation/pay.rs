//! Pay calculation functionality.
//!
//! This module provides the pay calculator that turns a set of shift
//! records into a payroll breakdown: hours split by day category, gross
//! pay with weekend premiums, and proportional deductions.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::RateSchedule;
use crate::models::{PayBreakdown, ShiftRecord};

use super::{DayCategory, day_category};

/// Rounds a monetary amount to 2 decimal places, half away from zero.
///
/// Every monetary output field is rounded exactly once, from unrounded
/// intermediates. Summing rounded parts may therefore differ from the
/// rounded total by a cent.
fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculates the payroll breakdown for a set of shifts.
///
/// Each shift's hours are accumulated into a day category based on its date
/// (Saturday, Sunday, or regular for Monday through Friday). Gross pay
/// applies the schedule's base rate to regular hours and the premium
/// multipliers to weekend hours. Deductions are proportional to total hours:
/// each per-block amount is multiplied by `total_hours / block_hours`, with
/// the quotient left unfloored so 6 hours at a 4-hour block withholds 1.5
/// blocks' worth.
///
/// `total_deductions` and `take_home_pay` are computed from the unrounded
/// deduction values and then rounded independently, so `total_deductions`
/// may differ by a cent from the sum of the three rounded deduction fields.
///
/// The calculator is a stateless pure transform: it performs no filtering
/// (callers restrict the shift set to a date range beforehand) and no input
/// validation (negative hours flow through the arithmetic unchanged).
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::calculate_pay;
/// use shiftpay_engine::config::RateSchedule;
/// use shiftpay_engine::models::{ShiftRecord, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// // 2026-01-14 is a Wednesday
/// let shifts = vec![ShiftRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     shift_type: ShiftType::Morning,
///     hours: Decimal::from(8),
/// }];
///
/// let breakdown = calculate_pay(&shifts, &RateSchedule::default());
/// assert_eq!(breakdown.gross_pay, Decimal::from_str("186.24").unwrap());
/// assert_eq!(breakdown.take_home_pay, Decimal::from_str("178.04").unwrap());
/// ```
pub fn calculate_pay(shifts: &[ShiftRecord], schedule: &RateSchedule) -> PayBreakdown {
    let mut regular_hours = Decimal::ZERO;
    let mut saturday_hours = Decimal::ZERO;
    let mut sunday_hours = Decimal::ZERO;

    for shift in shifts {
        match day_category(shift.date) {
            DayCategory::Sunday => sunday_hours += shift.hours,
            DayCategory::Saturday => saturday_hours += shift.hours,
            DayCategory::Regular => regular_hours += shift.hours,
        }
    }

    let total_hours = regular_hours + saturday_hours + sunday_hours;

    let regular_pay = regular_hours * schedule.base_rate;
    let saturday_pay = saturday_hours * schedule.base_rate * schedule.weekend.saturday;
    let sunday_pay = sunday_hours * schedule.base_rate * schedule.weekend.sunday;
    let gross_pay = regular_pay + saturday_pay + sunday_pay;

    // Deductions scale with total hours worked, block_hours at a time.
    let deduction_multiplier = total_hours / schedule.deductions.block_hours;
    let cpp_qpp = schedule.deductions.cpp_qpp * deduction_multiplier;
    let employment_insurance = schedule.deductions.employment_insurance * deduction_multiplier;
    let building_fund = schedule.deductions.building_fund * deduction_multiplier;
    let total_deductions = cpp_qpp + employment_insurance + building_fund;

    let take_home_pay = gross_pay - total_deductions;

    PayBreakdown {
        regular_hours,
        saturday_hours,
        sunday_hours,
        hours: total_hours,
        gross_pay: round_currency(gross_pay),
        cpp_qpp: round_currency(cpp_qpp),
        employment_insurance: round_currency(employment_insurance),
        building_fund: round_currency(building_fund),
        total_deductions: round_currency(total_deductions),
        take_home_pay: round_currency(take_home_pay),
    }
}
