//! HTTP request handlers for the Vacation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::PolicySettings;
use crate::error::EngineError;
use crate::models::VacationRequest;

use super::request::{PayoutRequest, TotalsQuery};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/vacation-totals", get(vacation_totals_handler))
        .route("/payout", post(payout_handler))
        .route("/policy", get(get_policy_handler).put(put_policy_handler))
        .with_state(state)
}

/// Handler for GET /vacation-totals endpoint.
///
/// Values every employee's accrued balance as of the `as_of` query date.
async fn vacation_totals_handler(
    State(state): State<AppState>,
    query: Result<Query<TotalsQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation totals request");

    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Query string rejected"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::invalid_query(rejection.body_text()),
            );
        }
    };

    let start_time = Instant::now();
    match state.service().get_vacation_totals(query.as_of) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                as_of = %query.as_of,
                employees = summary.employee_totals.len(),
                total_amount = %summary.total_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Vacation totals completed successfully"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => engine_error_response(correlation_id, err, "Vacation totals failed"),
    }
}

/// Handler for POST /payout endpoint.
///
/// Accepts a vacation request and returns the calculated payout with its
/// audit trace.
async fn payout_handler(
    State(state): State<AppState>,
    payload: Result<Json<PayoutRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payout request");

    let request: VacationRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match state.service().calculate_payout(&request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = request.employee_id,
                requested_days = %request.requested_days,
                amount = %result.amount,
                warnings = result.audit_trace.warnings.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Payout completed successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => engine_error_response(correlation_id, err, "Payout failed"),
    }
}

/// Handler for GET /policy endpoint.
async fn get_policy_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.service().policy_settings() {
        Ok(settings) => json_response(StatusCode::OK, settings),
        Err(err) => engine_error_response(correlation_id, err, "Policy lookup failed"),
    }
}

/// Handler for PUT /policy endpoint.
///
/// Replaces the policy settings after validating them. Subsequent
/// calculations use the new snapshot.
async fn put_policy_handler(
    State(state): State<AppState>,
    payload: Result<Json<PolicySettings>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing policy update");

    let settings = match payload {
        Ok(Json(settings)) => settings,
        Err(rejection) => return json_rejection_response(correlation_id, rejection),
    };

    match state.service().update_policy_settings(settings.clone()) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                calculation_period_months = settings.calculation_period_months,
                vacation_coefficient = %settings.vacation_coefficient,
                default_days_per_year = %settings.default_days_per_year,
                "Policy updated"
            );
            json_response(StatusCode::OK, settings)
        }
        Err(err) => engine_error_response(correlation_id, err, "Policy update failed"),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(correlation_id: Uuid, err: EngineError, context: &str) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "{}", context
    );
    let api_error: ApiErrorResponse = err.into();
    api_error.into_response()
}

fn json_rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
    json_response(StatusCode::BAD_REQUEST, error)
}
