use crate::core::PropertyCatalog;
use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod error;
pub mod handlers;

pub type AppState = Arc<dyn PropertyCatalog>;

pub fn router(catalog: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/properties", get(handlers::list_properties))
        .route("/properties/:property_id", get(handlers::get_property))
        .route("/seed", post(handlers::seed_properties));

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api", api)
        .fallback(error::not_found)
        .with_state(catalog)
        .layer(TraceLayer::new_for_http())
        // any origin, method and header
        .layer(CorsLayer::very_permissive())
}

pub async fn setup_and_serve(
    catalog: AppState,
    bind_address: &str,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .with_context(|| format!("failed to bind to address {}", bind_address))?;

    tracing::info!("kora catalog is up and running on {}", bind_address);

    axum::serve(listener, router(catalog).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
        .context("error running axum server")
}
