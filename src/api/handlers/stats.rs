//! Handler for per-code statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored URL and click counter for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.shortener.stats(&code).await?;
    let short_url = state.shortener.short_url(&code);

    Ok(Json(StatsResponse {
        code,
        long_url: record.long_url,
        short_url,
        clicks: record.clicks,
        created_at: record.created_at,
    }))
}
