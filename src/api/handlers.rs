//! HTTP request handlers for the Leave Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    YearWindow, build_balance, compute_balances, compute_grant_history, explain_entitlement,
    total_used_days,
};
use crate::models::{AuditTrace, parse_hire_date};

use super::request::{BalanceRequest, BatchBalanceRequest, EntitlementRequest};
use super::response::{ApiError, ApiErrorResponse, EntitlementResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlement", post(entitlement_handler))
        .route("/history", post(history_handler))
        .route("/balance", post(balance_handler))
        .route("/balances/batch", post(batch_handler))
        .with_state(state)
}

/// Handler for POST /entitlement.
///
/// Returns the year's entitlement with its breakdown and audit trace.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let hire_date = match parse_hire_date(request.hire_date.as_deref()) {
        Ok(date) => date,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };
    let evaluation_date = resolve_evaluation_date(request.evaluation_date);

    let start_time = Instant::now();
    let Some(breakdown) =
        explain_entitlement(hire_date, request.target_year, evaluation_date, state.policy())
    else {
        return year_out_of_range(request.target_year, correlation_id);
    };
    let duration_us = start_time.elapsed().as_micros() as u64;

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        target_year = request.target_year,
        regime = %breakdown.regime,
        total_days = breakdown.total_days,
        duration_us,
        "Entitlement calculated"
    );

    let audit_trace = AuditTrace {
        steps: breakdown.audit_steps.clone(),
        duration_us,
    };
    json_response(
        StatusCode::OK,
        &EntitlementResponse {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            employee_id: request.employee_id,
            year: request.target_year,
            evaluation_date,
            breakdown,
            audit_trace,
        },
    )
}

/// Handler for POST /history.
async fn history_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing history request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let hire_date = match parse_hire_date(request.hire_date.as_deref()) {
        Ok(date) => date,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };
    if !is_representable_year(request.target_year) {
        return year_out_of_range(request.target_year, correlation_id);
    }
    let evaluation_date = resolve_evaluation_date(request.evaluation_date);

    let history =
        compute_grant_history(hire_date, request.target_year, evaluation_date, state.policy());

    info!(
        correlation_id = %correlation_id,
        employee_id = %request.employee_id,
        target_year = request.target_year,
        events = history.events.len(),
        "History generated"
    );
    json_response(StatusCode::OK, &history)
}

/// Handler for POST /balance.
///
/// Used days come from the inline `used_days` value when present,
/// otherwise from the approved `usage` records in the target year.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let hire_date = match parse_hire_date(request.hire_date.as_deref()) {
        Ok(date) => date,
        Err(err) => return engine_error_response(err.into(), correlation_id),
    };
    if !is_representable_year(request.target_year) {
        return year_out_of_range(request.target_year, correlation_id);
    }
    if let Some(err) = request.usage.iter().find_map(|u| u.validate().err()) {
        return engine_error_response(err.into(), correlation_id);
    }

    let used_days = match request.used_days {
        Some(days) if days < Decimal::ZERO => {
            warn!(correlation_id = %correlation_id, used_days = %days, "Negative used days");
            return error_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(format!("used_days cannot be negative (got {})", days)),
            );
        }
        Some(days) => days,
        None => total_used_days(&request.usage, request.target_year),
    };
    let evaluation_date = resolve_evaluation_date(request.evaluation_date);

    let balance = build_balance(
        &request.employee_id,
        hire_date,
        request.target_year,
        evaluation_date,
        used_days,
        state.policy(),
    );

    info!(
        correlation_id = %correlation_id,
        employee_id = %balance.employee_id,
        target_year = balance.year,
        granted_days = balance.granted_days,
        remaining_days = %balance.remaining_days,
        "Balance calculated"
    );
    json_response(StatusCode::OK, &balance)
}

/// Handler for POST /balances/batch.
///
/// Returns 200 for any representable target year; employees that could
/// not be processed are listed under `failures`.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };
    if !is_representable_year(request.target_year) {
        return year_out_of_range(request.target_year, correlation_id);
    }
    let evaluation_date = resolve_evaluation_date(request.evaluation_date);

    let start_time = Instant::now();
    let outcome = compute_balances(
        &request.employees,
        &request.usage,
        request.target_year,
        evaluation_date,
        state.policy(),
    );

    info!(
        correlation_id = %correlation_id,
        target_year = request.target_year,
        employees = request.employees.len(),
        failed = outcome.failures.len(),
        duration_us = start_time.elapsed().as_micros(),
        "Batch balances calculated"
    );
    json_response(StatusCode::OK, &outcome)
}

/// "Today" is only resolved here, as the current UTC date; the calculator
/// always takes an explicit date. Callers in other time zones should send
/// their local date explicitly.
fn resolve_evaluation_date(requested: Option<NaiveDate>) -> NaiveDate {
    requested.unwrap_or_else(|| Utc::now().date_naive())
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
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
    error_response(StatusCode::BAD_REQUEST, error)
}

fn engine_error_response(api_error: ApiErrorResponse, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        code = %api_error.error.code,
        error = %api_error.error.message,
        "Request rejected"
    );
    error_response(api_error.status, api_error.error)
}

/// Every endpoint rejects years outside the calendar range alike.
fn is_representable_year(target_year: i32) -> bool {
    YearWindow::for_year(target_year).is_some()
}

fn year_out_of_range(target_year: i32, correlation_id: Uuid) -> Response {
    warn!(correlation_id = %correlation_id, target_year, "Target year out of range");
    error_response(
        StatusCode::BAD_REQUEST,
        ApiError::validation_error(format!("target_year {} is out of range", target_year)),
    )
}

fn error_response(status: StatusCode, error: ApiError) -> Response {
    json_response(status, &error)
}

fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
