//! Calculation logic for the shift pay engine.
//!
//! This module contains the pure functions at the heart of the engine:
//! day-of-week classification for premium rates, the shift-time table that
//! maps shift types to rostered times, the pay calculator that produces a
//! payroll breakdown from a set of shifts, and the analytics rollups.

mod day_category;
mod pay;
mod rollups;
mod shift_times;

pub use day_category::{DayCategory, day_category};
pub use pay::calculate_pay;
pub use rollups::{MONTH_BUCKETS, WEEK_BUCKETS, summarize};
pub use shift_times::{ShiftTimeSpec, shift_times};
