//! Shift-time resolution.
//!
//! This module provides the fixed roster table mapping each shift type to
//! its start time, end time, and duration.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ShiftType;

/// Serde adapter for `HH:mm` clock strings, the wire format the shift
/// tracker stores times in.
mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

/// The rostered times and duration for a shift type.
///
/// Serialized times use the `HH:mm` format, e.g. `"22:30"`.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::shift_times;
/// use shiftpay_engine::models::ShiftType;
///
/// let spec = shift_times(ShiftType::Night);
/// let json = serde_json::to_string(&spec).unwrap();
/// assert!(json.contains("\"start_time\":\"22:30\""));
/// assert!(json.contains("\"end_time\":\"06:30\""));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTimeSpec {
    /// The rostered start time.
    #[serde(with = "hh_mm")]
    pub start_time: NaiveTime,
    /// The rostered end time. For the night block this is on the following
    /// calendar day, so it reads earlier than the start time.
    #[serde(with = "hh_mm")]
    pub end_time: NaiveTime,
    /// The rostered duration in hours.
    pub hours: Decimal,
}

/// Resolves a shift type to its rostered times and duration.
///
/// The table is fixed:
///
/// | shift type | start | end   | hours |
/// |------------|-------|-------|-------|
/// | morning    | 06:30 | 14:30 | 8     |
/// | afternoon  | 14:30 | 22:30 | 8     |
/// | night      | 22:30 | 06:30 | 8     |
///
/// The duration is always the table constant. It must NOT be derived by
/// subtracting the clock times: the night block wraps midnight, so the
/// textual difference of its times would be negative.
///
/// # Example
///
/// ```
/// use shiftpay_engine::calculation::shift_times;
/// use shiftpay_engine::models::ShiftType;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let spec = shift_times(ShiftType::Morning);
/// assert_eq!(spec.start_time, NaiveTime::from_hms_opt(6, 30, 0).unwrap());
/// assert_eq!(spec.end_time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
/// assert_eq!(spec.hours, Decimal::from(8));
/// ```
pub fn shift_times(shift_type: ShiftType) -> ShiftTimeSpec {
    let (start, end) = match shift_type {
        ShiftType::Morning => ((6, 30), (14, 30)),
        ShiftType::Afternoon => ((14, 30), (22, 30)),
        ShiftType::Night => ((22, 30), (6, 30)),
    };

    ShiftTimeSpec {
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).expect("valid rostered time"),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).expect("valid rostered time"),
        hours: Decimal::from(8),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_morning_times() {
        let spec = shift_times(ShiftType::Morning);
        assert_eq!(spec.start_time, time(6, 30));
        assert_eq!(spec.end_time, time(14, 30));
        assert_eq!(spec.hours, Decimal::from(8));
    }

    #[test]
    fn test_afternoon_times() {
        let spec = shift_times(ShiftType::Afternoon);
        assert_eq!(spec.start_time, time(14, 30));
        assert_eq!(spec.end_time, time(22, 30));
        assert_eq!(spec.hours, Decimal::from(8));
    }

    #[test]
    fn test_night_times() {
        let spec = shift_times(ShiftType::Night);
        assert_eq!(spec.start_time, time(22, 30));
        assert_eq!(spec.end_time, time(6, 30));
        assert_eq!(spec.hours, Decimal::from(8));
    }

    #[test]
    fn test_night_duration_is_table_constant_not_clock_difference() {
        // end - start for the night block is negative on the clock face;
        // the duration must come from the table.
        let spec = shift_times(ShiftType::Night);
        let clock_diff = spec.end_time - spec.start_time;
        assert!(clock_diff.num_hours() < 0);
        assert_eq!(spec.hours, Decimal::from(8));
    }

    #[test]
    fn test_resolver_is_deterministic() {
        assert_eq!(
            shift_times(ShiftType::Afternoon),
            shift_times(ShiftType::Afternoon)
        );
    }

    #[test]
    fn test_lossy_tag_falls_back_to_morning_entry() {
        let spec = shift_times(ShiftType::from_tag("not-a-shift"));
        assert_eq!(spec, shift_times(ShiftType::Morning));
    }

    #[test]
    fn test_serialization_uses_hh_mm_strings() {
        let spec = shift_times(ShiftType::Night);
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"start_time\":\"22:30\""));
        assert!(json.contains("\"end_time\":\"06:30\""));
        assert!(json.contains("\"hours\":\"8\""));
    }

    #[test]
    fn test_deserialization_round_trip() {
        let spec = shift_times(ShiftType::Afternoon);
        let json = serde_json::to_string(&spec).unwrap();
        let deserialized: ShiftTimeSpec = serde_json::from_str(&json).unwrap();
        assert_eq!(spec, deserialized);
    }
}
