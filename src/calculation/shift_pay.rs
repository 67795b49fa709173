//! Shift pay calculation.
//!
//! Converts a shift's clock times, unpaid break and hourly rate into billable
//! hours and an amount. Both figures are rounded half-up to two decimals. The
//! amount is computed from the already-rounded hours, which is the figure that
//! appears on invoices.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftInput, ShiftResult};

/// Number of decimal places carried by hours and amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds half-up to [`MONEY_SCALE`] places and pins the scale so that
/// `8` renders as `8.00`.
pub(crate) fn round_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Prices an already-validated shift.
///
/// # Errors
///
/// Returns `InvalidInput` on `hourly_rate` when the amount does not fit in a
/// `Decimal`.
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::calculate_shift_pay;
/// use shift_engine::models::ShiftInput;
/// use rust_decimal::Decimal;
///
/// let shift = ShiftInput::parse("22:00", "06:00", 0, Decimal::new(10, 0)).unwrap();
/// let result = calculate_shift_pay(&shift).unwrap();
/// assert_eq!(result.total_hours.to_string(), "8.00");
/// assert_eq!(result.total_amount.to_string(), "80.00");
/// ```
pub fn calculate_shift_pay(shift: &ShiftInput) -> EngineResult<ShiftResult> {
    let worked_minutes = shift.worked_minutes();

    let total_hours = round_money(Decimal::from(worked_minutes) / Decimal::from(60));
    let total_amount = total_hours
        .checked_mul(shift.hourly_rate)
        .map(round_money)
        .ok_or_else(|| {
            EngineError::invalid_input(
                "hourly_rate",
                format!("out of range, {} x {} overflows", total_hours, shift.hourly_rate),
            )
        })?;

    debug!(
        start_time = %shift.start_time.format("%H:%M"),
        end_time = %shift.end_time.format("%H:%M"),
        break_minutes = shift.break_minutes,
        worked_minutes,
        total_hours = %total_hours,
        total_amount = %total_amount,
        "Computed shift pay"
    );

    Ok(ShiftResult {
        total_hours,
        total_amount,
    })
}

/// Validates raw shift values and prices the shift.
///
/// This is the entry point for request-handling code that holds raw strings
/// and numbers.
///
/// # Errors
///
/// Returns `InvalidInput` for a malformed time, a negative break, a negative
/// rate, or a rate so large the amount overflows.
///
/// # Examples
///
/// ```
/// use shift_engine::calculation::compute_shift;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute_shift("09:00", "09:50", 0, Decimal::from_str("12.345").unwrap()).unwrap();
/// assert_eq!(result.total_hours, Decimal::from_str("0.83").unwrap());
/// assert_eq!(result.total_amount, Decimal::from_str("10.25").unwrap());
/// ```
pub fn compute_shift(
    start_time: &str,
    end_time: &str,
    break_minutes: i64,
    hourly_rate: Decimal,
) -> EngineResult<ShiftResult> {
    let shift = ShiftInput::parse(start_time, end_time, break_minutes, hourly_rate)?;
    calculate_shift_pay(&shift)
}
