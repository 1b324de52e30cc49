use axum::Router;

pub mod budget;
pub mod catalog;
pub mod checkout;
pub mod system;

/// Router for every storefront endpoint (health is mounted separately).
pub fn router() -> Router {
    Router::new()
        .nest("/catalog", catalog::router())
        .nest("/checkout", checkout::router())
        .nest("/budget", budget::router())
}
