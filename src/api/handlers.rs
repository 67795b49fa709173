//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::availability::StoreError;
use crate::calculation::summarize_shifts;
use crate::error::{EngineError, EngineResult};
use crate::models::{ConflictResult, ShiftResult};

use super::request::{AvailabilityRequest, ComputeShiftRequest, ShiftTotalsRequest};
use super::response::{ApiError, ApiErrorResponse, ShiftTotalsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/shifts/compute", post(compute_shift_handler))
        .route("/shifts/totals", post(shift_totals_handler))
        .route("/availability/check", post(check_availability_handler))
        .with_state(state)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Handler for POST /shifts/compute.
async fn compute_shift_handler(
    payload: Result<Json<ComputeShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift computation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match request.compute() {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_hours = %result.total_hours,
                total_amount = %result.total_amount,
                "Shift computed"
            );
            json_ok(&result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /shifts/totals.
async fn shift_totals_handler(
    payload: Result<Json<ShiftTotalsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift totals request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let results: EngineResult<Vec<ShiftResult>> =
        request.shifts.iter().map(ComputeShiftRequest::compute).collect();
    let summary = results.and_then(|shifts| {
        let totals = summarize_shifts(&shifts)?;
        Ok((shifts, totals))
    });

    match summary {
        Ok((shifts, totals)) => {
            info!(
                correlation_id = %correlation_id,
                shifts_count = totals.shift_count,
                total_amount = %totals.total_amount,
                "Shift totals computed"
            );
            json_ok(&ShiftTotalsResponse { shifts, totals })
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /availability/check.
///
/// The commitment read runs on the blocking pool under the configured
/// timeout. A timeout or an aborted read is a dependency failure.
async fn check_availability_handler(
    State(state): State<AppState>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability check");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let query = match request.to_query() {
        Ok(query) => query,
        Err(err) => return error_response(correlation_id, err),
    };

    let staff_id = query.staff_id.clone();
    let date = query.date;
    let checker = state.checker().clone();
    let timeout = state.store_timeout();

    let started = Instant::now();
    let read = tokio::task::spawn_blocking(move || checker.check(&query));

    let outcome: EngineResult<ConflictResult> = match tokio::time::timeout(timeout, read).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(EngineError::DependencyFailure {
            message: format!("commitment read aborted: {}", join_error),
        }),
        Err(_) => Err(EngineError::DependencyFailure {
            message: StoreError::TimedOut {
                after_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            }
            .to_string(),
        }),
    };

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                staff_id = %staff_id,
                date = %date,
                has_conflict = result.has_conflict,
                conflicts = result.conflicts.len(),
                duration_us = started.elapsed().as_micros(),
                "Availability checked"
            );
            json_ok(&result)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn json_ok<T: serde::Serialize>(body: &T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        kind = ?err.kind(),
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response()
}
