//! Application state for the shift pay engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::RateSchedule;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently just the rate schedule the calculator runs against.
#[derive(Clone)]
pub struct AppState {
    /// The active rate schedule.
    schedule: Arc<RateSchedule>,
}

impl AppState {
    /// Creates a new application state with the given rate schedule.
    pub fn new(schedule: RateSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }

    /// Returns a reference to the rate schedule.
    pub fn schedule(&self) -> &RateSchedule {
        &self.schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_exposes_schedule() {
        let state = AppState::new(RateSchedule::default());
        assert_eq!(state.schedule().base_rate, RateSchedule::default().base_rate);
    }
}
