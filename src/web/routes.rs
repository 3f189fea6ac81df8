//! Browser-facing route configuration.

use crate::state::AppState;
use crate::web::handlers::{index_handler, shorten_form_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// HTML form routes.
///
/// # Endpoints
///
/// - `GET  /`        - Shortening form
/// - `POST /shorten` - Form submission, re-renders the page with the result
pub fn web_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index_handler))
        .route("/shorten", post(shorten_form_handler))
}
