//! Payroll breakdown model.
//!
//! This module contains the [`PayBreakdown`] type produced by the pay
//! calculator: the hours split by day category, gross pay, the individual
//! deductions, and take-home pay.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The complete result of a pay calculation.
///
/// Hour fields are exact (unrounded) sums and always satisfy
/// `regular_hours + saturday_hours + sunday_hours == hours`. The six monetary
/// fields are each independently rounded to 2 decimal places from unrounded
/// intermediates, so `total_deductions` can differ by up to a cent from the
/// sum of the three rounded deduction fields. That order of operations is
/// intentional and matches the tracker this engine was built for.
///
/// # Example
///
/// ```
/// use shiftpay_engine::models::PayBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayBreakdown::default();
/// assert_eq!(breakdown.gross_pay, Decimal::ZERO);
/// assert_eq!(breakdown.hours, Decimal::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayBreakdown {
    /// Hours worked Monday through Friday.
    pub regular_hours: Decimal,
    /// Hours worked on Saturdays (paid at the Saturday premium).
    pub saturday_hours: Decimal,
    /// Hours worked on Sundays (paid at the Sunday premium).
    pub sunday_hours: Decimal,
    /// Total hours across all three categories.
    pub hours: Decimal,
    /// Pay before deductions, rounded to 2 decimal places.
    pub gross_pay: Decimal,
    /// CPP/QPP deduction, rounded to 2 decimal places.
    pub cpp_qpp: Decimal,
    /// Employment insurance deduction, rounded to 2 decimal places.
    pub employment_insurance: Decimal,
    /// Building fund deduction, rounded to 2 decimal places.
    pub building_fund: Decimal,
    /// Sum of the three deductions, rounded to 2 decimal places.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions, rounded to 2 decimal places.
    pub take_home_pay: Decimal,
}
