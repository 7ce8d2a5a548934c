//! HTTP request handlers for the shift pay engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_pay, shift_times, summarize};
use crate::error::EngineError;
use crate::models::ShiftRecord;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/analytics", post(analytics_handler))
        .route("/shift-times/:shift_type", get(shift_times_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /calculate.
///
/// Accepts a list of shifts and returns the payroll breakdown computed
/// against the active rate schedule.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing pay calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shifts: Vec<ShiftRecord> = request.shifts.into_iter().map(Into::into).collect();
    let breakdown = calculate_pay(&shifts, state.schedule());

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        gross_pay = %breakdown.gross_pay,
        take_home_pay = %breakdown.take_home_pay,
        "Pay calculation completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(breakdown),
    )
        .into_response()
}

/// Handler for POST /analytics.
///
/// Accepts a list of shifts and returns the aggregate summary used by the
/// dashboard, relative to today's date.
async fn analytics_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing analytics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let shifts: Vec<ShiftRecord> = request.shifts.into_iter().map(Into::into).collect();
    let summary = summarize(&shifts, Utc::now().date_naive());

    info!(
        correlation_id = %correlation_id,
        shifts_count = shifts.len(),
        total_hours = %summary.total_hours,
        "Analytics summary completed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for GET /shift-times/{shift_type}.
///
/// Resolves a shift type to its rostered start/end times and duration.
/// Unknown tags are rejected with a 400 rather than silently falling back
/// to the morning entry.
async fn shift_times_handler(Path(shift_type): Path<String>) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    match shift_type.parse() {
        Ok(shift_type) => {
            info!(
                correlation_id = %correlation_id,
                shift_type = %shift_type,
                "Resolved shift times"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(shift_times(shift_type)),
            )
                .into_response()
        }
        Err(err @ EngineError::InvalidShiftType { .. }) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rejected unknown shift type"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
        Err(err) => {
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
