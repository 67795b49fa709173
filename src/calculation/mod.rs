//! Calculation logic for the shift engine.
//!
//! This module turns shift clock times into billable hours and amounts,
//! handling overnight wrap, break deduction and two-decimal half-up rounding,
//! and sums shift results into booking totals.

mod booking_totals;
mod shift_pay;

pub use booking_totals::{ShiftTotals, summarize_shifts};
pub use shift_pay::{MONEY_SCALE, calculate_shift_pay, compute_shift};
