//! # REST Table Store
//!
//! Catalog store backed by a remote relational data service with a
//! PostgREST-style query interface (select-all on a `courses` table).
//!
//! ## Configuration (Environment Variables)
//!
//! - `CSCURR_STORE_URL`: Base URL of the data service (required)
//! - `CSCURR_STORE_KEY`: Service API key, sent as `apikey` + Bearer (optional)
//! - `CSCURR_STORE_TABLE`: Table to select from (default: `courses`)

use super::CatalogStore;
use async_trait::async_trait;
use cscurr_core::{CatalogError, Course, parse_catalog};

/// Default table holding course records.
const DEFAULT_TABLE: &str = "courses";

// =============================================================================
// REST CATALOG STORE
// =============================================================================

/// Select-all catalog loads over a remote table endpoint.
///
/// The reqwest client is owned here and injected with the store; handlers
/// never construct their own connection state.
#[derive(Clone)]
pub struct RestCatalogStore {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    table: String,
}

impl RestCatalogStore {
    /// Create a store pointing at the given data service.
    ///
    /// `base_url` is the service root; the table endpoint is derived as
    /// `{base_url}/rest/v1/{table}`.
    #[must_use]
    pub fn new(base_url: impl Into<String>, api_key: Option<String>, table: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key,
            table: table.into(),
        }
    }

    /// Build a store from `CSCURR_STORE_*` environment variables.
    pub fn from_env() -> Result<Self, CatalogError> {
        let base_url = std::env::var("CSCURR_STORE_URL").map_err(|_| {
            CatalogError::ConfigError(
                "CSCURR_STORE_URL not set; required for the rest backend".to_string(),
            )
        })?;
        let api_key = std::env::var("CSCURR_STORE_KEY").ok().filter(|k| !k.is_empty());
        let table =
            std::env::var("CSCURR_STORE_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());

        Ok(Self::new(base_url, api_key, table))
    }

    /// Build the select-all request with optional key headers.
    fn select_all(&self) -> reqwest::RequestBuilder {
        let url = format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        );
        let mut req = self.http.get(&url).query(&[("select", "*")]);
        if let Some(ref key) = self.api_key {
            req = req.header("apikey", key).bearer_auth(key);
        }
        req
    }
}

#[async_trait]
impl CatalogStore for RestCatalogStore {
    async fn load(&self) -> Result<Vec<Course>, CatalogError> {
        let resp = self
            .select_all()
            .send()
            .await
            .map_err(|e| CatalogError::StoreUnreachable(format!("{}: {e}", self.base_url)))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::StoreRejected(status.as_u16()));
        }

        let payload = resp
            .json::<serde_json::Value>()
            .await
            .map_err(|e| CatalogError::MalformedCatalog(e.to_string()))?;

        parse_catalog(payload)
    }
}
