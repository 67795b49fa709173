//! HTTP API module for the shift engine.
//!
//! This module exposes shift pay computation and availability checking as
//! JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AvailabilityRequest, ComputeShiftRequest, ShiftTotalsRequest};
pub use response::{ApiError, ApiErrorResponse, ShiftTotalsResponse};
pub use state::AppState;
