//! # Catalog Module
//!
//! The `Course` data model and the decoding rules applied to stored
//! catalog records.
//!
//! Records arrive from a backing store as raw JSON. Decoding is strict at
//! the top level (the payload must be an array of course objects, each
//! with a `code`) and deliberately lenient for `prerequisites`: a value
//! that is missing, `null`, scalar, or a list containing anything other
//! than strings is replaced with the empty list. The coercion is
//! all-or-nothing per record — there is no partial-list salvage.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

// =============================================================================
// COURSE
// =============================================================================

/// A single catalog entry.
///
/// Courses are read-only from this crate's perspective: they are created
/// and updated in the backing store and re-fetched on every load.
///
/// Fields beyond `code`, `category`, and `prerequisites` (display name,
/// credits, and whatever else the store carries) pass through untouched
/// in `extra` and reappear verbatim on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course identifier, e.g. `"CS101"`.
    pub code: String,
    /// Optional classification, e.g. `"core"` or `"elective"`.
    /// Serializes as `null` when absent.
    #[serde(default)]
    pub category: Option<String>,
    /// Ordered prerequisite course codes. Always list-typed after
    /// decoding, regardless of the stored shape.
    #[serde(default, deserialize_with = "prereq_list_or_empty")]
    pub prerequisites: Vec<String>,
    /// Passthrough fields preserved from the stored record.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Course {
    /// Create a course with no category, no prerequisites, and no
    /// passthrough fields.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            category: None,
            prerequisites: Vec::new(),
            extra: serde_json::Map::new(),
        }
    }

    /// Builder-style category setter.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder-style prerequisites setter.
    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prereqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prereqs.into_iter().map(Into::into).collect();
        self
    }
}

/// Accept any JSON shape for `prerequisites`; only a list of strings
/// survives, everything else collapses to the empty list.
fn prereq_list_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}

// =============================================================================
// CATALOG PARSING
// =============================================================================

/// Decode a raw catalog payload into courses.
///
/// The payload must be a JSON array of course objects; anything else is
/// a [`CatalogError::MalformedCatalog`]. Per-record `prerequisites`
/// normalization happens here as part of decoding.
pub fn parse_catalog(payload: serde_json::Value) -> Result<Vec<Course>, CatalogError> {
    serde_json::from_value(payload).map_err(|e| CatalogError::MalformedCatalog(e.to_string()))
}

/// Decode a raw catalog payload from bytes (file-backed stores).
pub fn parse_catalog_bytes(bytes: &[u8]) -> Result<Vec<Course>, CatalogError> {
    serde_json::from_slice(bytes).map_err(|e| CatalogError::MalformedCatalog(e.to_string()))
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while obtaining or decoding the catalog.
///
/// - No silent failures above the per-record prerequisite coercion
/// - Use `Result<T, CatalogError>` for fallible operations
/// - The core should never panic; all errors must be recoverable
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The backing store could not be reached.
    #[error("catalog store unreachable: {0}")]
    StoreUnreachable(String),

    /// The backing store answered with a non-success status.
    #[error("catalog store returned status {0}")]
    StoreRejected(u16),

    /// The top-level catalog payload did not decode as an array of courses.
    #[error("malformed catalog payload: {0}")]
    MalformedCatalog(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Runtime configuration is missing or invalid.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

// =============================================================================
// TESTS
// =============================================================================
