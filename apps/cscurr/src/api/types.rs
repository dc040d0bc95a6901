//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Course records themselves serialize straight from
//! [`cscurr_core::Course`]; the types here cover the envelope around
//! them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// WELCOME RESPONSE
// =============================================================================

/// Root endpoint greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: "Welcome to CS Curr API".to_string(),
        }
    }
}

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// ELIGIBLE REQUEST
// =============================================================================

/// Eligibility computation request.
///
/// `completed_courses` defaults to empty when absent; `category` is an
/// optional exact-match restriction, with the empty string meaning no
/// restriction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EligibleRequest {
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl EligibleRequest {
    /// The completed sequence as a membership set; duplicates and order
    /// are irrelevant to the filter.
    #[must_use]
    pub fn completed_set(&self) -> BTreeSet<String> {
        self.completed_courses.iter().cloned().collect()
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Uniform failure body: every request-boundary error surfaces as
/// `{"error": <message>}` with HTTP 500, matching both backing-store and
/// malformed-request failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

// =============================================================================
// TESTS
// =============================================================================
