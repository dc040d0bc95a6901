//! Integration tests for the CS Curr HTTP API.
//!
//! Uses axum-test to test the API handlers without starting a real
//! server, with the in-memory catalog store substituted for the remote
//! backends.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use async_trait::async_trait;
use axum_test::TestServer;
use cscurr::api::{AppState, ErrorResponse, HealthResponse, WelcomeResponse, create_router};
use cscurr::store::{CatalogStore, MemoryCatalogStore};
use cscurr_core::{CatalogError, Course};
use serde_json::json;
use std::sync::Arc;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// The two-course chain: A has no prerequisites, B needs A.
fn chain_catalog() -> Vec<Course> {
    vec![
        Course::new("A"),
        Course::new("B").with_prerequisites(["A"]),
    ]
}

/// One "core" and one "elective" course, both without prerequisites.
fn categorized_catalog() -> Vec<Course> {
    vec![
        Course::new("CS101").with_category("core"),
        Course::new("EE105").with_category("elective"),
    ]
}

/// Create a test server over an in-memory store serving `courses`.
fn create_test_server(courses: Vec<Course>) -> TestServer {
    let store = Arc::new(MemoryCatalogStore::new(courses));
    let state = AppState::new(store);
    TestServer::new(create_router(state)).unwrap()
}

/// Store whose backing service is never reachable.
struct FailingStore;

#[async_trait]
impl CatalogStore for FailingStore {
    async fn load(&self) -> Result<Vec<Course>, CatalogError> {
        Err(CatalogError::StoreUnreachable(
            "http://db.invalid: connection refused".to_string(),
        ))
    }
}

fn create_failing_test_server() -> TestServer {
    let state = AppState::new(Arc::new(FailingStore));
    TestServer::new(create_router(state)).unwrap()
}

// =============================================================================
// HOME ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_home_returns_welcome_message() {
    let server = create_test_server(vec![]);

    let response = server.get("/").await;

    response.assert_status_ok();
    let welcome: WelcomeResponse = response.json();
    assert_eq!(welcome.message, "Welcome to CS Curr API");
}

// =============================================================================
// HEALTH ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let server = create_test_server(vec![]);

    let response = server.get("/health").await;

    response.assert_status_ok();
    let health: HealthResponse = response.json();
    assert_eq!(health.status, "ok");
    assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
}

// =============================================================================
// COURSES ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_courses_returns_full_catalog() {
    let server = create_test_server(chain_catalog());

    let response = server.get("/api/courses").await;

    response.assert_status_ok();
    let catalog: Vec<Course> = response.json();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog[0].code, "A");
    assert_eq!(catalog[1].code, "B");
    assert_eq!(catalog[1].prerequisites, vec!["A"]);
}

#[tokio::test]
async fn test_courses_empty_catalog() {
    let server = create_test_server(vec![]);

    let response = server.get("/api/courses").await;

    response.assert_status_ok();
    let catalog: Vec<Course> = response.json();
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn test_courses_store_failure_is_uniform_error() {
    let server = create_failing_test_server();

    let response = server.get("/api/courses").await;

    response.assert_status_internal_server_error();
    let body: ErrorResponse = response.json();
    assert!(body.error.contains("unreachable"));
}

// =============================================================================
// ELIGIBLE ENDPOINT TESTS
// =============================================================================

#[tokio::test]
async fn test_eligible_nothing_completed() {
    let server = create_test_server(chain_catalog());

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": []}))
        .await;

    response.assert_status_ok();
    let eligible: Vec<Course> = response.json();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].code, "A");
}

#[tokio::test]
async fn test_eligible_prerequisite_completed_unlocks_dependent() {
    let server = create_test_server(chain_catalog());

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": ["A"]}))
        .await;

    response.assert_status_ok();
    let eligible: Vec<Course> = response.json();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].code, "B");
}

#[tokio::test]
async fn test_eligible_everything_completed_is_empty() {
    let server = create_test_server(chain_catalog());

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": ["A", "B"]}))
        .await;

    response.assert_status_ok();
    let eligible: Vec<Course> = response.json();
    assert!(eligible.is_empty());
}

#[tokio::test]
async fn test_eligible_category_restriction() {
    let server = create_test_server(categorized_catalog());

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": [], "category": "core"}))
        .await;

    response.assert_status_ok();
    let eligible: Vec<Course> = response.json();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].code, "CS101");
}

#[tokio::test]
async fn test_eligible_without_category_ignores_categories() {
    let server = create_test_server(categorized_catalog());

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": []}))
        .await;

    response.assert_status_ok();
    let eligible: Vec<Course> = response.json();
    assert_eq!(eligible.len(), 2);
}

#[tokio::test]
async fn test_eligible_missing_completed_field_defaults_to_empty() {
    let server = create_test_server(chain_catalog());

    let response = server.post("/api/eligible").json(&json!({})).await;

    response.assert_status_ok();
    let eligible: Vec<Course> = response.json();
    assert_eq!(eligible.len(), 1);
    assert_eq!(eligible[0].code, "A");
}

#[tokio::test]
async fn test_eligible_malformed_body_is_uniform_error() {
    let server = create_test_server(chain_catalog());

    let response = server
        .post("/api/eligible")
        .content_type("application/json")
        .text("{not json")
        .await;

    response.assert_status_internal_server_error();
    let body: ErrorResponse = response.json();
    assert!(!body.error.is_empty());
}

#[tokio::test]
async fn test_eligible_store_failure_is_uniform_error() {
    let server = create_failing_test_server();

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": []}))
        .await;

    response.assert_status_internal_server_error();
    let body: ErrorResponse = response.json();
    assert!(body.error.contains("unreachable"));
}

#[tokio::test]
async fn test_eligible_passes_through_extra_fields() {
    let catalog = vec![Course {
        code: "CS101".to_string(),
        category: Some("core".to_string()),
        prerequisites: vec![],
        extra: serde_json::from_value(json!({"name": "Intro to CS", "credits": 4})).unwrap(),
    }];
    let server = create_test_server(catalog);

    let response = server
        .post("/api/eligible")
        .json(&json!({"completed_courses": []}))
        .await;

    response.assert_status_ok();
    let eligible: serde_json::Value = response.json();
    assert_eq!(eligible[0]["name"], json!("Intro to CS"));
    assert_eq!(eligible[0]["credits"], json!(4));
}
