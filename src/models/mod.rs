//! Core data models for the shift engine.
//!
//! This module contains the value types passed into and returned from the
//! shift calculator and the availability conflict checker.

mod availability;
mod clock;
mod commitment;
mod shift;

pub use availability::{AvailabilityQuery, Conflict, ConflictResult};
pub use clock::{MINUTES_PER_DAY, hhmm, minutes_of_day, parse_clock_time};
pub use commitment::{Commitment, CommitmentKind, CommitmentWindow};
pub use shift::{ShiftInput, ShiftResult};
