use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::post, Json, Router};

use plipshop_cart::CartStore;
use plipshop_core::DomainError;

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new().route("/whatsapp", post(whatsapp_checkout))
}

/// Rebuild the client's cart from the catalog and hand it off as a WhatsApp link.
pub async fn whatsapp_checkout(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::CheckoutRequest>,
) -> axum::response::Response {
    let mut cart = CartStore::new();
    for item in body.items {
        let Some(product) = state.catalog.get(item.product_id) else {
            return errors::domain_error_to_response(DomainError::not_found(format!(
                "product {}",
                item.product_id
            )));
        };
        cart.add(product);
        if cart.set_quantity(product.id, item.quantity).count_changed() {
            tracing::debug!(product = %product.id, "dropped checkout item with no quantity");
        }
    }

    match state.checkout.order_link(&cart) {
        Ok(link) => Json(dto::CheckoutResponse {
            url: link.url.to_string(),
            message: link.message,
            item_count: cart.item_count(),
            total_units: cart.cart().total_units(),
        })
        .into_response(),
        Err(e) => errors::checkout_error_to_response(e),
    }
}
