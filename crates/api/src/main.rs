use anyhow::Context;

use plipshop_api::{
    app::{build_app, AppState},
    config::Settings,
};
use plipshop_catalog::load_catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    plipshop_observability::init();

    let settings = Settings::from_env();

    // Fetched once; a failure leaves the storefront with an empty catalog.
    let provider = settings.catalog_provider();
    let catalog = load_catalog(provider.as_ref()).await;

    let state = AppState::new(catalog, &settings)?;
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&settings.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", settings.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
