//! Shift input and result types.
//!
//! A [`ShiftInput`] carries validated clock times, an unpaid break and an
//! hourly rate. A [`ShiftResult`] carries the billable figures derived from it.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::clock::{MINUTES_PER_DAY, hhmm, minutes_of_day, parse_clock_time};

/// A single shift to be priced.
///
/// Constructed through [`ShiftInput::parse`], which guarantees the break is
/// non-negative and the rate is non-negative. Raw request bodies go through
/// `parse`, never straight through serde.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShiftInput {
    /// The wall-clock start of the shift.
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// The wall-clock end of the shift. Earlier than `start_time` means the
    /// shift crosses midnight.
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    /// Unpaid break taken during the shift, in minutes.
    pub break_minutes: u32,
    /// The hourly rate the shift is billed at.
    pub hourly_rate: Decimal,
}

impl ShiftInput {
    /// Validates raw request values and builds a shift.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when either time is malformed,
    /// when `break_minutes` is negative, or when `hourly_rate` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::ShiftInput;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = ShiftInput::parse("22:00", "06:00", 30, Decimal::new(2550, 2)).unwrap();
    /// assert_eq!(shift.elapsed_minutes(), 480);
    /// assert_eq!(shift.worked_minutes(), 450);
    ///
    /// assert!(ShiftInput::parse("22:00", "06:00", -1, Decimal::ONE).is_err());
    /// ```
    pub fn parse(
        start_time: &str,
        end_time: &str,
        break_minutes: i64,
        hourly_rate: Decimal,
    ) -> EngineResult<Self> {
        let start_time = parse_clock_time("start_time", start_time)?;
        let end_time = parse_clock_time("end_time", end_time)?;

        if break_minutes < 0 {
            return Err(EngineError::invalid_input(
                "break_minutes",
                format!("must not be negative, got {}", break_minutes),
            ));
        }
        let break_minutes = u32::try_from(break_minutes).map_err(|_| {
            EngineError::invalid_input(
                "break_minutes",
                format!("out of range, got {}", break_minutes),
            )
        })?;

        if hourly_rate < Decimal::ZERO {
            return Err(EngineError::invalid_input(
                "hourly_rate",
                format!("must not be negative, got {}", hourly_rate),
            ));
        }

        Ok(Self {
            start_time,
            end_time,
            break_minutes,
            hourly_rate,
        })
    }

    /// Minutes between start and end, wrapping once across midnight.
    pub fn elapsed_minutes(&self) -> u32 {
        let start = minutes_of_day(self.start_time);
        let end = minutes_of_day(self.end_time);

        if end >= start {
            end - start
        } else {
            end + MINUTES_PER_DAY - start
        }
    }

    /// Elapsed minutes less the break, floored at zero.
    pub fn worked_minutes(&self) -> u32 {
        self.elapsed_minutes().saturating_sub(self.break_minutes)
    }
}

/// The billable figures for one shift.
///
/// Both values carry exactly two fraction digits and are never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftResult {
    /// Worked hours, rounded half-up to 2 decimals.
    pub total_hours: Decimal,
    /// Rounded hours multiplied by the rate, rounded half-up to 2 decimals.
    pub total_amount: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_day_shift_elapsed_minutes() {
        let shift = ShiftInput::parse("09:00", "17:30", 0, dec("20")).unwrap();
        assert_eq!(shift.elapsed_minutes(), 510);
        assert_eq!(shift.worked_minutes(), 510);
    }

    #[test]
    fn test_overnight_shift_wraps_once() {
        let shift = ShiftInput::parse("22:00", "06:00", 0, dec("10")).unwrap();
        assert_eq!(shift.elapsed_minutes(), 480);
    }

    #[test]
    fn test_one_minute_before_start_is_almost_a_full_day() {
        let shift = ShiftInput::parse("09:00", "08:59", 0, dec("10")).unwrap();
        assert_eq!(shift.elapsed_minutes(), 1439);
    }

    #[test]
    fn test_equal_times_are_zero_length() {
        let shift = ShiftInput::parse("09:00", "09:00", 15, dec("15")).unwrap();
        assert_eq!(shift.elapsed_minutes(), 0);
        assert_eq!(shift.worked_minutes(), 0);
    }

    #[test]
    fn test_break_longer_than_shift_clamps_to_zero() {
        let shift = ShiftInput::parse("09:00", "09:30", 60, dec("20")).unwrap();
        assert_eq!(shift.worked_minutes(), 0);
    }

    #[test]
    fn test_negative_break_is_invalid_input() {
        let err = ShiftInput::parse("09:00", "17:00", -30, dec("20")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("break_minutes"));
    }

    #[test]
    fn test_oversized_break_is_invalid_input() {
        let err = ShiftInput::parse("09:00", "17:00", i64::MAX, dec("20")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_negative_rate_is_invalid_input() {
        let err = ShiftInput::parse("09:00", "17:00", 0, dec("-0.01")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("hourly_rate"));
    }

    #[test]
    fn test_zero_rate_is_accepted() {
        assert!(ShiftInput::parse("09:00", "17:00", 0, Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_malformed_time_names_the_field() {
        let err = ShiftInput::parse("09:00", "5pm", 0, dec("20")).unwrap_err();
        assert!(err.to_string().contains("end_time"));
    }

    #[test]
    fn test_shift_input_serialization() {
        let shift = ShiftInput::parse("07:30", "15:00", 30, dec("31.25")).unwrap();
        let json = serde_json::to_value(&shift).unwrap();
        assert_eq!(json["start_time"], "07:30");
        assert_eq!(json["end_time"], "15:00");
        assert_eq!(json["break_minutes"], 30);
        assert_eq!(json["hourly_rate"], "31.25");
    }
}
