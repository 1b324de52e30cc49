use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use plipshop_cart::CheckoutError;
use plipshop_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound(what) => {
            json_error(StatusCode::NOT_FOUND, "not_found", format!("{what} not found"))
        }
    }
}

pub fn checkout_error_to_response(err: CheckoutError) -> axum::response::Response {
    match err {
        CheckoutError::EmptyCart => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "empty_cart", err.to_string())
        }
        CheckoutError::InvalidPhone(_) | CheckoutError::Url(_) => {
            tracing::error!(error = %err, "checkout link could not be built");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "checkout_error", err.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
