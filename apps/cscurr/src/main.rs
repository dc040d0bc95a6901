//! # CS Curr API
//!
//! The main binary for the CS Curr course-eligibility service.
//!
//! This application provides:
//! - HTTP REST API server (axum-based)
//! - CLI interface for catalog and eligibility queries
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 apps/cscurr (THE BINARY)                 │
//! │                                                          │
//! │  ┌───────────┐   ┌───────────┐   ┌───────────────────┐  │
//! │  │   CLI     │   │ HTTP API  │   │  Catalog stores   │  │
//! │  │  (clap)   │   │  (axum)   │   │  (rest | file)    │  │
//! │  └─────┬─────┘   └─────┬─────┘   └─────────┬─────────┘  │
//! │        │               │                   │            │
//! │        └───────────────┼───────────────────┘            │
//! │                        ▼                                │
//! │                ┌───────────────┐                        │
//! │                │  cscurr-core  │                        │
//! │                │  (THE LOGIC)  │                        │
//! │                └───────────────┘                        │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server against a local catalog file
//! cscurr --backend file --catalog courses.json serve --host 0.0.0.0 --port 8080
//!
//! # CLI operations
//! cscurr courses
//! cscurr eligible --completed CS101,MA101 --category core
//! ```

use clap::Parser;
use cscurr::cli;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — CSCURR_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("CSCURR_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cscurr=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the startup banner.
fn print_banner() {
    println!(
        r#"
  CS Curr API v{}

  Catalog in • Prerequisites checked • Eligible courses out
"#,
        env!("CARGO_PKG_VERSION")
    );
}
