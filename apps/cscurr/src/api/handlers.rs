//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Every handler follows the same failure discipline: the error is logged
//! at the boundary and surfaced to the caller as a uniform
//! `{"error": <message>}` body with HTTP 500. There is no finer-grained
//! error taxonomy on the wire and no retry.

use super::{
    AppState,
    types::{EligibleRequest, ErrorResponse, HealthResponse, WelcomeResponse},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cscurr_core::eligible_courses;

// =============================================================================
// HOME HANDLER
// =============================================================================

/// Root endpoint greeting.
pub async fn home_handler() -> impl IntoResponse {
    Json(WelcomeResponse::default())
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// COURSES HANDLER
// =============================================================================

/// List the full course catalog.
///
/// Loads fresh from the backing store on every request; every record in
/// the response carries a list-typed `prerequisites` field.
pub async fn courses_handler(State(state): State<AppState>) -> Response {
    match state.store.load().await {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(e) => {
            tracing::error!("catalog load failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

// =============================================================================
// ELIGIBLE HANDLER
// =============================================================================

/// Compute the courses a student is currently eligible to take.
///
/// Loads the catalog fresh, then filters it against the request's
/// completed set and optional category restriction. A body that does not
/// decode as JSON surfaces the same uniform 500 error as a store failure.
pub async fn eligible_handler(
    State(state): State<AppState>,
    payload: Result<Json<EligibleRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("eligibility request rejected: {e}");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.body_text())),
            )
                .into_response();
        }
    };

    match state.store.load().await {
        Ok(catalog) => {
            let completed = request.completed_set();
            let eligible = eligible_courses(&completed, catalog, request.category.as_deref());
            (StatusCode::OK, Json(eligible)).into_response()
        }
        Err(e) => {
            tracing::error!("catalog load failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}
