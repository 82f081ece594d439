//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/books/*`       - Book endpoints
//! - `/publishers/*`  - Publisher endpoints
//! - `GET /health`    - Health check (database)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with every route and the tracing layer applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/books", api::routes::book_routes())
        .nest("/publishers", api::routes::publisher_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service, trimming trailing slashes before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
