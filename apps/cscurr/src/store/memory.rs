//! # Memory Catalog Store
//!
//! Fixed in-memory catalog. This is the substitutable fake the HTTP and
//! CLI layers are tested against; it is also usable for embedding the
//! API with a hardcoded catalog.

use super::CatalogStore;
use async_trait::async_trait;
use cscurr_core::{CatalogError, Course};

// =============================================================================
// MEMORY CATALOG STORE
// =============================================================================

/// Catalog store serving a fixed list of courses.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    courses: Vec<Course>,
}

impl MemoryCatalogStore {
    /// Create a store serving the given courses, in the given order.
    #[must_use]
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn load(&self) -> Result<Vec<Course>, CatalogError> {
        Ok(self.courses.clone())
    }
}
