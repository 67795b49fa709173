//! Request types for the shift engine API.
//!
//! Request bodies carry raw strings and numbers. Conversion into engine
//! types runs the engine's own validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::compute_shift;
use crate::error::EngineResult;
use crate::models::{AvailabilityQuery, ShiftResult};

/// Request body for the `/shifts/compute` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeShiftRequest {
    /// Shift start as `HH:MM`.
    pub start_time: String,
    /// Shift end as `HH:MM`; earlier than the start means overnight.
    pub end_time: String,
    /// Unpaid break in minutes.
    #[serde(default)]
    pub break_minutes: i64,
    /// Hourly rate, as a JSON number or a decimal string.
    pub hourly_rate: Decimal,
}

impl ComputeShiftRequest {
    /// Validates the request and prices the shift.
    pub fn compute(&self) -> EngineResult<ShiftResult> {
        compute_shift(
            &self.start_time,
            &self.end_time,
            self.break_minutes,
            self.hourly_rate,
        )
    }
}

/// Request body for the `/shifts/totals` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftTotalsRequest {
    /// The shifts of one booking.
    pub shifts: Vec<ComputeShiftRequest>,
}

/// Request body for the `/availability/check` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    /// The staff member to check.
    pub staff_id: String,
    /// The calendar date to check.
    pub date: NaiveDate,
    /// Requested start as `HH:MM`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Requested end as `HH:MM`.
    #[serde(default)]
    pub end_time: Option<String>,
    /// A commitment to ignore, such as the booking being edited.
    #[serde(default)]
    pub exclude_commitment_id: Option<String>,
}

impl AvailabilityRequest {
    /// Validates the request and builds the engine query.
    pub fn to_query(&self) -> EngineResult<AvailabilityQuery> {
        let query = AvailabilityQuery::new(
            &self.staff_id,
            self.date,
            self.start_time.as_deref(),
            self.end_time.as_deref(),
        )?;

        Ok(match &self.exclude_commitment_id {
            Some(id) => query.excluding(id.clone()),
            None => query,
        })
    }
}
