//! Process settings, read from the environment with logged fallbacks.

use plipshop_budget::QuoteIssuer;
use plipshop_catalog::{CatalogProvider, StaticCatalog, SupabaseCatalog};

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_CATALOG_RPC: &str = "conexion_a_catalogo3";
pub const DEFAULT_WHATSAPP_PHONE: &str = "5491127240042";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub bind_addr: String,
    pub supabase_url: Option<String>,
    pub supabase_anon_key: String,
    pub catalog_rpc: String,
    pub whatsapp_phone: String,
    pub issuer: QuoteIssuer,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            supabase_url: None,
            supabase_anon_key: String::new(),
            catalog_rpc: DEFAULT_CATALOG_RPC.to_string(),
            whatsapp_phone: DEFAULT_WHATSAPP_PHONE.to_string(),
            issuer: QuoteIssuer::default(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(v) = get("PLIPSHOP_BIND_ADDR") {
            settings.bind_addr = v;
        }

        settings.supabase_url = get("SUPABASE_URL");
        if settings.supabase_url.is_none() {
            tracing::warn!("SUPABASE_URL not set; serving an empty catalog");
        }
        match get("SUPABASE_ANON_KEY") {
            Some(v) => settings.supabase_anon_key = v,
            None if settings.supabase_url.is_some() => {
                tracing::warn!("SUPABASE_ANON_KEY not set; catalog requests will be anonymous");
            }
            None => {}
        }
        if let Some(v) = get("CATALOG_RPC") {
            settings.catalog_rpc = v;
        }

        match get("WHATSAPP_PHONE") {
            Some(v) => settings.whatsapp_phone = v,
            None => tracing::warn!(
                phone = DEFAULT_WHATSAPP_PHONE,
                "WHATSAPP_PHONE not set; using the store default"
            ),
        }

        let issuer = &mut settings.issuer;
        for (key, field) in [
            ("QUOTE_ISSUER_NAME", &mut issuer.name),
            ("QUOTE_ISSUER_ADDRESS", &mut issuer.address),
            ("QUOTE_ISSUER_PHONE", &mut issuer.phone),
            ("QUOTE_ISSUER_EMAIL", &mut issuer.email),
            ("QUOTE_ISSUER_WEB", &mut issuer.web),
        ] {
            if let Some(v) = get(key) {
                *field = v;
            }
        }

        settings
    }

    /// Catalog source: the hosted RPC when configured, otherwise an empty static list.
    pub fn catalog_provider(&self) -> Box<dyn CatalogProvider> {
        match &self.supabase_url {
            Some(url) => Box::new(SupabaseCatalog::new(
                url.clone(),
                self.supabase_anon_key.clone(),
                self.catalog_rpc.clone(),
            )),
            None => Box::new(StaticCatalog::default()),
        }
    }
}
