//! Handler for link shortening endpoint.

use axum::{Json, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the short code for a URL, creating it on first use.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "code": "1", "short_url": "http://127.0.0.1:8000/1" }
/// ```
///
/// Submitting the same URL again (with or without `http://`) returns the
/// same code.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty after trimming.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    let code = state
        .shortener
        .get_or_create_code(&payload.long_url)
        .await?;
    let short_url = state.shortener.short_url(&code);

    Ok(Json(ShortenResponse { code, short_url }))
}
