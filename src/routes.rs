//! Top-level router combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Shortening form (HTML)
//! - `POST /shorten`     - Form submission (HTML)
//! - `GET  /health`      - Health check: database, click queue
//! - `/api/*`            - JSON API
//! - `GET  /{code}`      - Short link redirect
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static paths take precedence over the `/{code}` catch-all, so a code can
/// never shadow `/health` or `/shorten`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(web::routes::web_routes())
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .route("/{code}", get(redirect_handler))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
