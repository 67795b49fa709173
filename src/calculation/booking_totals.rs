//! Booking-level totals across several shifts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftResult;

use super::shift_pay::MONEY_SCALE;

/// Summed figures for the shifts of one booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTotals {
    /// Number of shifts summed.
    pub shift_count: usize,
    /// Sum of the per-shift rounded hours.
    pub total_hours: Decimal,
    /// Sum of the per-shift rounded amounts.
    pub total_amount: Decimal,
}

/// Sums already-rounded shift results.
///
/// Each shift is rounded on its own before it is summed, so the totals match
/// the per-shift lines on an invoice. Sums of 2-decimal values need no further
/// rounding.
///
/// # Errors
///
/// Returns `InvalidInput` on `shifts` when a running total overflows.
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::{compute_shift, summarize_shifts};
/// use rust_decimal::Decimal;
///
/// let shifts = vec![
///     compute_shift("09:00", "17:00", 30, Decimal::new(20, 0)).unwrap(),
///     compute_shift("22:00", "06:00", 0, Decimal::new(20, 0)).unwrap(),
/// ];
/// let totals = summarize_shifts(&shifts).unwrap();
/// assert_eq!(totals.shift_count, 2);
/// assert_eq!(totals.total_hours.to_string(), "15.50");
/// assert_eq!(totals.total_amount.to_string(), "310.00");
/// ```
pub fn summarize_shifts(results: &[ShiftResult]) -> EngineResult<ShiftTotals> {
    let mut total_hours = Decimal::ZERO;
    let mut total_amount = Decimal::ZERO;

    for (index, result) in results.iter().enumerate() {
        total_hours = checked_sum(total_hours, result.total_hours, "total_hours", index)?;
        total_amount = checked_sum(total_amount, result.total_amount, "total_amount", index)?;
    }

    total_hours.rescale(MONEY_SCALE);
    total_amount.rescale(MONEY_SCALE);

    Ok(ShiftTotals {
        shift_count: results.len(),
        total_hours,
        total_amount,
    })
}

fn checked_sum(
    running: Decimal,
    value: Decimal,
    figure: &str,
    index: usize,
) -> EngineResult<Decimal> {
    running.checked_add(value).ok_or_else(|| {
        EngineError::invalid_input(
            "shifts",
            format!("{} out of range after shift {}", figure, index),
        )
    })
}
