//! Availability query and conflict result types.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::clock::{MINUTES_PER_DAY, minutes_of_day, parse_clock_time};
use super::commitment::{Commitment, CommitmentKind, CommitmentWindow};

/// "Is this staff member free on this date, in this window?"
#[derive(Debug, Clone, PartialEq)]
pub struct AvailabilityQuery {
    /// The staff member being checked.
    pub staff_id: String,
    /// The calendar date being checked.
    pub date: NaiveDate,
    /// Requested start, if the request is for a window.
    pub start_time: Option<NaiveTime>,
    /// Requested end, if the request is for a window.
    pub end_time: Option<NaiveTime>,
    /// A commitment to ignore, typically the booking being edited.
    pub exclude_commitment_id: Option<String>,
}

impl AvailabilityQuery {
    /// Validates raw request values and builds a query.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] for a blank staff id or a
    /// malformed time.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::AvailabilityQuery;
    /// use chrono::NaiveDate;
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
    /// let query = AvailabilityQuery::new("staff_1", date, Some("13:00"), Some("17:00")).unwrap();
    /// assert!(query.is_windowed());
    ///
    /// let whole_day = AvailabilityQuery::new("staff_1", date, None, None).unwrap();
    /// assert!(!whole_day.is_windowed());
    /// ```
    pub fn new(
        staff_id: &str,
        date: NaiveDate,
        start_time: Option<&str>,
        end_time: Option<&str>,
    ) -> EngineResult<Self> {
        let staff_id = staff_id.trim();
        if staff_id.is_empty() {
            return Err(EngineError::invalid_input("staff_id", "must not be empty"));
        }

        let start_time = start_time
            .map(|raw| parse_clock_time("start_time", raw))
            .transpose()?;
        let end_time = end_time
            .map(|raw| parse_clock_time("end_time", raw))
            .transpose()?;

        Ok(Self {
            staff_id: staff_id.to_string(),
            date,
            start_time,
            end_time,
            exclude_commitment_id: None,
        })
    }

    /// Ignores the given commitment when checking for conflicts.
    pub fn excluding(mut self, commitment_id: impl Into<String>) -> Self {
        self.exclude_commitment_id = Some(commitment_id.into());
        self
    }

    /// Returns true if the query names a start or an end time.
    pub fn is_windowed(&self) -> bool {
        self.start_time.is_some() || self.end_time.is_some()
    }

    /// Returns the half-open minute range requested on the target date.
    ///
    /// A missing end closes at `open_window_end` (minutes since midnight), or
    /// at midnight if that is not after the start. A missing start opens at
    /// midnight. An end before the start wraps and is clipped at midnight.
    /// Returns `None` for a date-only query.
    pub fn requested_range(&self, open_window_end: u32) -> Option<(u32, u32)> {
        match (self.start_time, self.end_time) {
            (None, None) => None,
            (Some(start), None) => {
                let start = minutes_of_day(start);
                let end = if open_window_end > start {
                    open_window_end.min(MINUTES_PER_DAY)
                } else {
                    MINUTES_PER_DAY
                };
                Some((start, end))
            }
            (None, Some(end)) => Some((0, minutes_of_day(end))),
            (Some(start), Some(end)) => {
                let start = minutes_of_day(start);
                let end = minutes_of_day(end);
                if end < start {
                    Some((start, MINUTES_PER_DAY))
                } else {
                    Some((start, end))
                }
            }
        }
    }
}

/// One commitment that clashes with a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// The id of the clashing commitment.
    pub commitment_id: String,
    /// Where the commitment came from.
    pub kind: CommitmentKind,
    /// The window the commitment occupies.
    pub window: CommitmentWindow,
    /// Minutes shared with the requested window. `None` for full-day
    /// commitments and for date-only queries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlap_minutes: Option<u32>,
}

impl Conflict {
    /// Builds a conflict entry from a commitment.
    pub fn from_commitment(commitment: &Commitment, overlap_minutes: Option<u32>) -> Self {
        Self {
            commitment_id: commitment.id.clone(),
            kind: commitment.kind,
            window: commitment.window,
            overlap_minutes,
        }
    }
}

/// The outcome of an availability check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictResult {
    /// True when at least one commitment clashes.
    pub has_conflict: bool,
    /// Every clashing commitment.
    pub conflicts: Vec<Conflict>,
}

impl ConflictResult {
    /// A result with no conflicts.
    pub fn none() -> Self {
        Self {
            has_conflict: false,
            conflicts: Vec::new(),
        }
    }

    /// Builds a result from the collected conflicts.
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        Self {
            has_conflict: !conflicts.is_empty(),
            conflicts,
        }
    }
}
