//! Request types for the shift pay engine API.
//!
//! This module defines the JSON request structures shared by the
//! `/calculate` and `/analytics` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ShiftRecord, ShiftType};

/// Request body for the `/calculate` and `/analytics` endpoints.
///
/// Callers are expected to have already filtered the shifts to the date
/// range they care about; the engine computes over exactly what it is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The shifts to compute over.
    pub shifts: Vec<ShiftEntryRequest>,
}

/// A single shift in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftEntryRequest {
    /// The calendar date of the shift (`YYYY-MM-DD`).
    pub date: NaiveDate,
    /// The hours attributed to the shift.
    pub hours: Decimal,
    /// The rostered block. Optional because the pay calculator never reads
    /// it; omitting it defaults to morning, matching the tracker's lenient
    /// tag handling. Analytics callers should always supply it.
    #[serde(default = "default_shift_type")]
    pub shift_type: ShiftType,
}

fn default_shift_type() -> ShiftType {
    ShiftType::Morning
}

impl From<ShiftEntryRequest> for ShiftRecord {
    fn from(req: ShiftEntryRequest) -> Self {
        ShiftRecord {
            date: req.date,
            shift_type: req.shift_type,
            hours: req.hours,
        }
    }
}
