//! # Catalog Store Module
//!
//! The data-loading abstraction behind the API: one trait, swappable
//! backends.
//!
//! Both original deployments of this service — a remote relational table
//! service and a flat JSON file — do the same thing: fetch every course
//! record and normalize its prerequisite list. That shared contract lives
//! here as [`CatalogStore`]; the backends differ only in transport.
//!
//! ## Backends
//!
//! - [`RestCatalogStore`] — select-all over a remote table endpoint
//! - [`FileCatalogStore`] — wholesale read of a local JSON file
//! - [`MemoryCatalogStore`] — fixed in-memory catalog, the substitutable
//!   fake for tests and embedding
//!
//! Stores are constructed explicitly and passed into [`crate::api::AppState`];
//! nothing in this module holds global connection state.

mod file;
mod memory;
mod rest;

pub use file::FileCatalogStore;
pub use memory::MemoryCatalogStore;
pub use rest::RestCatalogStore;

use async_trait::async_trait;
use cscurr_core::{CatalogError, Course};

// =============================================================================
// STORE CONTRACT
// =============================================================================

/// A source of the full course catalog.
///
/// `load` re-fetches everything on every call: no filtering, no sorting,
/// no caching. Each returned course carries a list-typed `prerequisites`
/// field regardless of the stored shape.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Fetch all course records from the backing store.
    ///
    /// Fails with [`CatalogError::StoreUnreachable`], [`CatalogError::StoreRejected`],
    /// [`CatalogError::IoError`], or [`CatalogError::MalformedCatalog`]
    /// depending on where the load broke down.
    async fn load(&self) -> Result<Vec<Course>, CatalogError>;
}
