use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use plipshop_catalog::ProductCategory;
use plipshop_core::{DomainError, ProductId};

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/categories", get(list_categories))
        .route("/grouped", get(grouped_products))
        .route("/:id/inquiry", get(product_inquiry))
}

pub async fn list_products(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<dto::CatalogQuery>,
) -> axum::response::Response {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => match raw.parse::<ProductCategory>() {
            Ok(c) => Some(c),
            Err(e) => return errors::domain_error_to_response(e),
        },
    };

    let products = state.catalog.filter(category);
    Json(dto::ProductListResponse {
        category,
        count: products.len(),
        products,
    })
    .into_response()
}

pub async fn list_categories(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    let categories: Vec<_> = ProductCategory::ALL
        .into_iter()
        .map(|c| dto::CategoryResponse {
            key: c,
            name: c.display_name(),
            label: c.label(),
            color: c.color(),
            count: state.catalog.filter(Some(c)).len(),
        })
        .collect();
    Json(categories)
}

pub async fn grouped_products(Extension(state): Extension<Arc<AppState>>) -> axum::response::Response {
    let groups: Vec<_> = state
        .catalog
        .group_by_category()
        .into_iter()
        .map(|(category, products)| dto::CategoryGroupResponse {
            category,
            name: category.display_name(),
            products,
        })
        .collect();
    Json(groups).into_response()
}

pub async fn product_inquiry(
    Extension(state): Extension<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = match id.parse::<ProductId>() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };
    let Some(product) = state.catalog.get(product_id) else {
        return errors::domain_error_to_response(DomainError::not_found(format!(
            "product {product_id}"
        )));
    };

    match state.checkout.inquiry_link(product) {
        Ok(link) => Json(dto::LinkResponse {
            url: link.url.to_string(),
            message: link.message,
        })
        .into_response(),
        Err(e) => errors::checkout_error_to_response(e),
    }
}
