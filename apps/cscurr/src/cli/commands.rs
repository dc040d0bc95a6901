//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use crate::api;
use crate::store::{CatalogStore, FileCatalogStore, RestCatalogStore};
use cscurr_core::{CatalogError, Course, eligible_courses};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::Arc;

// =============================================================================
// STORE SELECTION
// =============================================================================

/// Build the catalog store named by `--backend`.
///
/// The store is constructed once here and injected into whichever command
/// runs; commands never reach for connection state themselves.
pub fn build_store(backend: &str, catalog_path: &Path) -> Result<Arc<dyn CatalogStore>, CatalogError> {
    match backend {
        "rest" => Ok(Arc::new(RestCatalogStore::from_env()?)),
        "file" => Ok(Arc::new(FileCatalogStore::new(catalog_path))),
        other => Err(CatalogError::ConfigError(format!(
            "unknown backend '{}' (expected \"rest\" or \"file\")",
            other
        ))),
    }
}

// =============================================================================
// SERVE COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_serve(
    store: Arc<dyn CatalogStore>,
    host: &str,
    port: u16,
) -> Result<(), CatalogError> {
    println!("CS Curr API Starting...");
    println!();
    println!("Configuration:");
    println!("  Host: {}", host);
    println!("  Port: {}", port);
    println!();
    println!("Endpoints:");
    println!("  GET  /             - Welcome message");
    println!("  GET  /api/courses  - Full course catalog");
    println!("  POST /api/eligible - Eligible courses for a completed set");
    println!("  GET  /health       - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, store).await
}

// =============================================================================
// COURSES COMMAND
// =============================================================================

/// Print the full course catalog.
pub async fn cmd_courses(store: Arc<dyn CatalogStore>, json_mode: bool) -> Result<(), CatalogError> {
    let catalog = store.load().await?;
    print_courses(&catalog, json_mode);
    Ok(())
}

// =============================================================================
// ELIGIBLE COMMAND
// =============================================================================

/// Compute and print eligible courses for a completed set.
pub async fn cmd_eligible(
    store: Arc<dyn CatalogStore>,
    completed: &[String],
    category: Option<&str>,
    json_mode: bool,
) -> Result<(), CatalogError> {
    let catalog = store.load().await?;
    let completed_set: BTreeSet<String> = completed.iter().cloned().collect();
    let eligible = eligible_courses(&completed_set, catalog, category);

    if !json_mode {
        println!(
            "Eligible courses ({} completed{}):",
            completed_set.len(),
            category
                .filter(|c| !c.is_empty())
                .map(|c| format!(", category {}", c))
                .unwrap_or_default()
        );
    }
    print_courses(&eligible, json_mode);
    Ok(())
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Print courses as JSON or as one line per course.
fn print_courses(courses: &[Course], json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(courses).unwrap_or_default()
        );
        return;
    }

    if courses.is_empty() {
        println!("  (none)");
        return;
    }
    for course in courses {
        let category = course.category.as_deref().unwrap_or("-");
        let prereqs = if course.prerequisites.is_empty() {
            "none".to_string()
        } else {
            course.prerequisites.join(", ")
        };
        println!("  {:<10} [{}] prerequisites: {}", course.code, category, prereqs);
    }
}
