//! Shift pay and staff availability engine for a staffing marketplace.
//!
//! This crate converts shift clock times into billable hours and amounts, and
//! decides whether a requested booking clashes with a staff member's existing
//! commitments. All clock times are naive (no timezone); callers normalize
//! zones before calling in.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod calculation;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
