//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use plipshop_budget::QuoteIssuer;
use plipshop_cart::WhatsAppCheckout;
use plipshop_catalog::Catalog;

use crate::config::Settings;

pub mod dto;
pub mod errors;
pub mod routes;

/// Read-only state shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub checkout: WhatsAppCheckout,
    pub issuer: QuoteIssuer,
}

impl AppState {
    pub fn new(catalog: Catalog, settings: &Settings) -> anyhow::Result<Self> {
        let checkout = WhatsAppCheckout::new(&settings.whatsapp_phone)
            .context("WHATSAPP_PHONE must contain a phone number")?;
        Ok(Self {
            catalog,
            checkout,
            issuer: settings.issuer.clone(),
        })
    }
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(state: AppState) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(state)))
}
