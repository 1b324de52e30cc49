use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::post, Json, Router};
use chrono::Utc;

use plipshop_budget::{format_currency, BudgetCalculator, BudgetHeader, QuoteNumber};
use plipshop_core::{DomainError, SessionId};

use crate::app::{dto, errors, AppState};

pub fn router() -> Router {
    Router::new().route("/quote", post(build_quote))
}

/// Build a budget from the posted lines and render its printable quote.
pub async fn build_quote(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::QuoteRequest>,
) -> axum::response::Response {
    let session = SessionId::new();
    let header = BudgetHeader {
        client_name: body.client_name,
        attended_by: body.attended_by,
        date: body.date.unwrap_or_else(|| Utc::now().date_naive()),
        phone: body.phone,
    };

    let mut calculator = BudgetCalculator::with_header(session, header);
    for line in body.lines {
        let Some(product) = state.catalog.get(line.product_id) else {
            return errors::domain_error_to_response(DomainError::not_found(format!(
                "product {}",
                line.product_id
            )));
        };
        calculator.upsert_line(product, line.quantity, line.unit_price);
    }
    calculator.select_tax_mode(body.tax_mode);

    let number = body
        .number
        .map(QuoteNumber::new)
        .unwrap_or_else(|| QuoteNumber::from_session(session));
    let document = calculator.quote(&state.issuer, number).to_string();

    tracing::info!(
        %session,
        %number,
        lines = calculator.lines().len(),
        tax_mode = %calculator.tax_mode(),
        "quote rendered"
    );

    Json(dto::QuoteResponse {
        number: number.to_string(),
        tax_mode: calculator.tax_mode(),
        lines: calculator.lines(),
        totals: calculator.totals(),
        formatted_subtotal: format_currency(calculator.subtotal()),
        formatted_total: format_currency(calculator.total()),
        document,
    })
    .into_response()
}
