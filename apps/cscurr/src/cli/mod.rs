//! # CS Curr CLI Module
//!
//! This module implements the CLI interface for the CS Curr API.
//!
//! ## Available Commands
//!
//! - `serve` - Start the HTTP server
//! - `courses` - Print the full course catalog
//! - `eligible` - Compute eligible courses for a completed set

mod commands;

use clap::{Parser, Subcommand};
use cscurr_core::CatalogError;
use std::path::PathBuf;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// CS Curr API - course catalog and prerequisite eligibility.
///
/// Serves a course catalog over HTTP and computes, for a given student,
/// which courses their completed prerequisites unlock.
#[derive(Parser, Debug)]
#[command(name = "cscurr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Catalog backend: "rest" (remote table service) or "file" (local JSON)
    #[arg(short = 'B', long, global = true, default_value = "rest")]
    pub backend: String,

    /// Path to the catalog file (file backend only)
    #[arg(short = 'F', long, global = true, default_value = "courses.json")]
    pub catalog: PathBuf,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Print the full course catalog
    Courses,

    /// Compute eligible courses for a completed set
    Eligible {
        /// Completed course codes (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        completed: Vec<String>,

        /// Restrict results to an exact category
        #[arg(short = 'c', long)]
        category: Option<String>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), CatalogError> {
    let store = build_store(&cli.backend, &cli.catalog)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Serve { host, port }) => cmd_serve(store, &host, port).await,
        Some(Commands::Eligible {
            completed,
            category,
        }) => cmd_eligible(store, &completed, category.as_deref(), json_mode).await,
        Some(Commands::Courses) | None => cmd_courses(store, json_mode).await,
    }
}
