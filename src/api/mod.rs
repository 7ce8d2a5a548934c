//! HTTP API module for the shift pay engine.
//!
//! This module provides the REST endpoints for calculating pay, resolving
//! shift times, and summarizing analytics over a set of shifts.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, ShiftEntryRequest};
pub use response::ApiError;
pub use state::AppState;
