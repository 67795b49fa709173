//! Commitment model.
//!
//! A commitment is an existing claim on a staff member's time: a confirmed
//! booking, a leave record, or a blocked day. The engine only ever reads them.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::clock::{MINUTES_PER_DAY, hhmm, minutes_of_day};

/// Where a commitment came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitmentKind {
    /// A confirmed booking for a shift.
    Booking,
    /// Declared leave.
    Leave,
    /// An admin or staff-entered unavailability block.
    Blocked,
}

impl std::fmt::Display for CommitmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitmentKind::Booking => write!(f, "booking"),
            CommitmentKind::Leave => write!(f, "leave"),
            CommitmentKind::Blocked => write!(f, "blocked"),
        }
    }
}

/// The portion of the day a commitment occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommitmentWindow {
    /// The whole calendar day.
    FullDay,
    /// A clock-time window within the day.
    Timed {
        /// Start of the window.
        #[serde(with = "hhmm")]
        start: NaiveTime,
        /// End of the window. Earlier than `start` means the window runs past
        /// midnight.
        #[serde(with = "hhmm")]
        end: NaiveTime,
    },
}

impl CommitmentWindow {
    /// Returns the half-open minute range `[start, end)` this window covers on
    /// its own date, or `None` for a full-day window.
    ///
    /// Windows that wrap past midnight are clipped at the end of the day.
    pub fn minute_range(&self) -> Option<(u32, u32)> {
        match self {
            CommitmentWindow::FullDay => None,
            CommitmentWindow::Timed { start, end } => {
                let start = minutes_of_day(*start);
                let end = minutes_of_day(*end);
                if end < start {
                    Some((start, MINUTES_PER_DAY))
                } else {
                    Some((start, end))
                }
            }
        }
    }
}

/// An existing booked or blocked interval for a staff member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commitment {
    /// Identifier of the underlying booking or leave record.
    pub id: String,
    /// The staff member the commitment belongs to.
    pub staff_id: String,
    /// The calendar date of the commitment.
    pub date: NaiveDate,
    /// Where the commitment came from.
    pub kind: CommitmentKind,
    /// The part of the day it occupies.
    pub window: CommitmentWindow,
}

impl Commitment {
    /// Creates a timed commitment.
    pub fn timed(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        date: NaiveDate,
        kind: CommitmentKind,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            date,
            kind,
            window: CommitmentWindow::Timed { start, end },
        }
    }

    /// Creates a full-day commitment.
    pub fn full_day(
        id: impl Into<String>,
        staff_id: impl Into<String>,
        date: NaiveDate,
        kind: CommitmentKind,
    ) -> Self {
        Self {
            id: id.into(),
            staff_id: staff_id.into(),
            date,
            kind,
            window: CommitmentWindow::FullDay,
        }
    }

    /// Returns true if this commitment blocks the whole day.
    pub fn is_full_day(&self) -> bool {
        matches!(self.window, CommitmentWindow::FullDay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    #[test]
    fn test_timed_minute_range() {
        let window = CommitmentWindow::Timed {
            start: hm(9, 0),
            end: hm(13, 0),
        };
        assert_eq!(window.minute_range(), Some((540, 780)));
    }

    #[test]
    fn test_overnight_window_is_clipped_at_midnight() {
        let window = CommitmentWindow::Timed {
            start: hm(22, 0),
            end: hm(6, 0),
        };
        assert_eq!(window.minute_range(), Some((1320, 1440)));
    }

    #[test]
    fn test_full_day_has_no_minute_range() {
        assert_eq!(CommitmentWindow::FullDay.minute_range(), None);
    }

    #[test]
    fn test_constructors() {
        let booking = Commitment::timed(
            "bk_1",
            "staff_1",
            date(),
            CommitmentKind::Booking,
            hm(9, 0),
            hm(13, 0),
        );
        assert!(!booking.is_full_day());

        let leave = Commitment::full_day("lv_1", "staff_1", date(), CommitmentKind::Leave);
        assert!(leave.is_full_day());
    }

    #[test]
    fn test_commitment_deserialization() {
        let json = r#"{
            "id": "bk_1",
            "staff_id": "staff_1",
            "date": "2026-03-02",
            "kind": "booking",
            "window": { "type": "timed", "start": "09:00", "end": "13:00" }
        }"#;

        let commitment: Commitment = serde_json::from_str(json).unwrap();
        assert_eq!(commitment.kind, CommitmentKind::Booking);
        assert_eq!(commitment.window.minute_range(), Some((540, 780)));
    }

    #[test]
    fn test_full_day_commitment_from_yaml() {
        let yaml = r#"
id: lv_1
staff_id: staff_1
date: 2026-03-02
kind: leave
window:
  type: full_day
"#;
        let commitment: Commitment = serde_yaml::from_str(yaml).unwrap();
        assert!(commitment.is_full_day());
        assert_eq!(commitment.kind.to_string(), "leave");
    }
}
