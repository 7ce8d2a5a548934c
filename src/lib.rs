//! Pay calculation engine for a personal shift tracker.
//!
//! This crate provides the payroll core of a shift-tracking application:
//! resolving shift types (morning/afternoon/night) to their rostered times,
//! and turning a set of recorded shifts into a payroll breakdown with weekend
//! premium rates and proportional statutory-style deductions.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
