//! DTOs for per-code statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Stored data and click counter for a short code.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}
