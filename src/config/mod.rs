//! Rate schedule configuration for the shift pay engine.
//!
//! This module provides the rate schedule types and the YAML loader.
//! The canonical schedule (base rate 23.28, Saturday 1.5x, Sunday 2.0x,
//! per-4-hour deductions) is available via [`RateSchedule::default`].

mod loader;
mod types;

pub use loader::ScheduleLoader;
pub use types::{DeductionSchedule, RateSchedule, WeekendMultipliers};
