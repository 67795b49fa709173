//! Wall-clock time parsing.
//!
//! All times handled by the engine are naive (no timezone) and minute
//! resolution. Callers normalize zones before handing times over.

use chrono::{NaiveTime, Timelike};

use crate::error::{EngineError, EngineResult};

/// Number of minutes in a day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Parses an `HH:MM` (or `HH:MM:00`) clock time.
///
/// `field` names the input in the returned error so the caller can point at
/// the offending value.
///
/// # Examples
///
/// ```
/// use shift_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// let time = parse_clock_time("start_time", "22:15").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(22, 15, 0).unwrap());
/// assert!(parse_clock_time("start_time", "25:00").is_err());
/// ```
pub fn parse_clock_time(field: &str, value: &str) -> EngineResult<NaiveTime> {
    parse_hhmm(value).map_err(|message| EngineError::invalid_input(field, message))
}

/// Parses a clock time, returning a message without a field prefix.
fn parse_hhmm(value: &str) -> Result<NaiveTime, String> {
    let trimmed = value.trim();

    let parsed = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| format!("expected HH:MM, got '{}'", value))?;

    // Minute resolution only; leap seconds land in the nanosecond field.
    if parsed.second() != 0 || parsed.nanosecond() != 0 {
        return Err(format!("seconds are not supported, got '{}'", value));
    }

    Ok(parsed)
}

/// Returns the number of minutes since midnight for a clock time.
pub fn minutes_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Serde adapter that reads and writes clock times as `HH:MM` strings.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes a clock time as `HH:MM`.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    /// Deserializes a clock time from `HH:MM` or `HH:MM:00`.
    ///
    /// The error carries no field name; the deserializer reports the
    /// location.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_parses_hh_mm() {
        assert_eq!(parse_clock_time("t", "09:00").unwrap(), hm(9, 0));
        assert_eq!(parse_clock_time("t", "23:59").unwrap(), hm(23, 59));
        assert_eq!(parse_clock_time("t", "00:00").unwrap(), hm(0, 0));
    }

    #[test]
    fn test_accepts_database_style_seconds() {
        assert_eq!(parse_clock_time("t", "13:30:00").unwrap(), hm(13, 30));
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(parse_clock_time("t", " 07:45 ").unwrap(), hm(7, 45));
    }

    #[test]
    fn test_rejects_non_zero_seconds() {
        let err = parse_clock_time("end_time", "13:30:15").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains("end_time"));
    }

    #[test]
    fn test_rejects_malformed_values() {
        for raw in ["", "9am", "abc", "25:00", "12:60", "24:00", "12-30", "12:30pm"] {
            let err = parse_clock_time("start_time", raw).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidInput, "input {:?}", raw);
        }
    }

    #[test]
    fn test_minutes_of_day() {
        assert_eq!(minutes_of_day(hm(0, 0)), 0);
        assert_eq!(minutes_of_day(hm(9, 50)), 590);
        assert_eq!(minutes_of_day(hm(23, 59)), 1439);
    }

    #[test]
    fn test_hhmm_serde_adapter() {
        #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
        struct Wrapper {
            #[serde(with = "hhmm")]
            at: NaiveTime,
        }

        let json = serde_json::to_string(&Wrapper { at: hm(6, 5) }).unwrap();
        assert_eq!(json, r#"{"at":"06:05"}"#);

        let back: Wrapper = serde_json::from_str(r#"{"at":"18:20:00"}"#).unwrap();
        assert_eq!(back.at, hm(18, 20));

        assert!(serde_json::from_str::<Wrapper>(r#"{"at":"noon"}"#).is_err());
    }

    #[test]
    fn test_hhmm_error_does_not_name_a_fixed_field() {
        #[derive(serde::Deserialize, Debug)]
        struct Window {
            #[serde(with = "hhmm")]
            #[allow(dead_code)]
            start: NaiveTime,
        }

        let err = serde_yaml::from_str::<Window>("start: \"25:00\"\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected HH:MM, got '25:00'"), "{}", message);
        assert!(!message.contains("Invalid time"), "{}", message);
    }
}
