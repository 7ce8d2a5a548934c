//! Data models for the shift pay engine.
//!
//! This module contains the model types used by the engine:
//! shift records and shift types, the payroll breakdown produced
//! by the pay calculator, and the analytics summary.

mod analytics;
mod pay_breakdown;
mod shift;

pub use analytics::{AnalyticsSummary, MonthBucket, ShiftTypeCounts, WeekBucket};
pub use pay_breakdown::PayBreakdown;
pub use shift::{ShiftRecord, ShiftType};
