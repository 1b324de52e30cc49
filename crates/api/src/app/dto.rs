use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use plipshop_budget::{BudgetLine, BudgetTotals, TaxMode};
use plipshop_catalog::{Product, ProductCategory};
use plipshop_core::ProductId;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Wire key; absent or empty means every category.
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CheckoutItemRequest>,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutItemRequest {
    pub product_id: ProductId,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub attended_by: String,
    /// Defaults to today.
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub tax_mode: TaxMode,
    #[serde(default)]
    pub lines: Vec<QuoteLineRequest>,
    /// Quote number to print; derived from the session when absent.
    pub number: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteLineRequest {
    pub product_id: ProductId,
    pub quantity: i64,
    pub unit_price: f64,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductListResponse<'a> {
    pub category: Option<ProductCategory>,
    pub count: usize,
    pub products: Vec<&'a Product>,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub key: ProductCategory,
    pub name: &'static str,
    pub label: String,
    pub color: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryGroupResponse<'a> {
    pub category: ProductCategory,
    pub name: &'static str,
    pub products: Vec<&'a Product>,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub url: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub url: String,
    pub message: String,
    pub item_count: usize,
    pub total_units: u64,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse<'a> {
    pub number: String,
    pub tax_mode: TaxMode,
    pub lines: &'a [BudgetLine],
    pub totals: BudgetTotals,
    pub formatted_subtotal: String,
    pub formatted_total: String,
    pub document: String,
}
