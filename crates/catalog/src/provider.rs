//! Catalog provider boundary.
//!
//! The storefront reads its product list exactly once, from a hosted backend.
//! A failed read is logged and degrades to an empty catalog; there is no retry.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::product::Product;

/// Read-only source of product records.
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Fetch the full product list (no paging).
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError>;
}

/// Load the catalog snapshot, falling back to an empty catalog on failure.
pub async fn load_catalog(provider: &dyn CatalogProvider) -> Catalog {
    match provider.fetch_products().await {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            Catalog::new(products)
        }
        Err(e) => {
            tracing::error!(error = %e, "error loading products; serving an empty catalog");
            Catalog::empty()
        }
    }
}

/// Fixed in-memory product list (dev/test, or no provider configured).
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<Product>,
}

impl StaticCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.products.clone())
    }
}

/// Supabase PostgREST RPC returning the product rows.
#[derive(Debug, Clone)]
pub struct SupabaseCatalog {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    function: String,
}

impl SupabaseCatalog {
    pub fn new(
        base_url: impl Into<String>,
        anon_key: impl Into<String>,
        function: impl Into<String>,
    ) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            function: function.into(),
        }
    }

    fn rpc_url(&self) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.base_url.trim_end_matches('/'),
            self.function
        )
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        // Keys with non-header characters are simply not sent; the provider rejects the call.
        if let Ok(v) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", v);
        }
        if let Ok(v) = HeaderValue::from_str(&format!("Bearer {}", self.anon_key)) {
            headers.insert(AUTHORIZATION, v);
        }
        headers
    }
}

#[async_trait::async_trait]
impl CatalogProvider for SupabaseCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, CatalogError> {
        let url = self.rpc_url();
        tracing::debug!(%url, "fetching catalog");

        let resp = self
            .client
            .post(&url)
            .headers(self.headers())
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let bytes = resp.bytes().await?;
        let rows: Option<Vec<Product>> = serde_json::from_slice(&bytes)?;
        Ok(rows.unwrap_or_default())
    }
}
