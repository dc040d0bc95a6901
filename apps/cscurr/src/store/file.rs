//! # File Catalog Store
//!
//! Catalog store backed by a static local JSON file, read wholesale on
//! every load. Edits to the file show up on the next request without a
//! restart.

use super::CatalogStore;
use async_trait::async_trait;
use cscurr_core::{CatalogError, Course, parse_catalog_bytes};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE CATALOG STORE
// =============================================================================

/// Wholesale reads of a JSON catalog file.
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    /// Create a store reading from the given file path.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl CatalogStore for FileCatalogStore {
    async fn load(&self) -> Result<Vec<Course>, CatalogError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            CatalogError::IoError(format!("cannot read catalog file {:?}: {e}", self.path))
        })?;

        parse_catalog_bytes(&bytes)
    }
}
