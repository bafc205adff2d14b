// src/api/http/router.rs
// HTTP router composition for the status API

use anyhow::Result;
use axum::{
    Router,
    http::{Method, header},
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers::{divide_handler, health_handler, status_handler, unknown_route_handler};

/// Create the router with all endpoints
pub fn create_router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .route("/divide", get(divide_handler))
        .fallback(unknown_route_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the HTTP server
pub async fn run(host: &str, port: u16) -> Result<()> {
    let app = create_router();
    let bind_address = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Status API listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
