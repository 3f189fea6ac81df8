//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

use crate::domain::click_event::ClickEvent;
use crate::domain::click_worker::record_with_retry;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Resolve the code by exact match
/// 2. Queue a click event for the background worker
/// 3. Return 307 Temporary Redirect
///
/// # Click Tracking
///
/// Clicks never delay or fail the redirect. When the queue is full or the
/// worker is gone, the click is recorded from a detached task instead of
/// being dropped.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.shortener.resolve(&code).await?;
    debug!(code = %code, long_url = %long_url, "Resolved short code");

    enqueue_click(&state, ClickEvent::new(code));

    Ok(Redirect::temporary(&long_url))
}

fn enqueue_click(state: &AppState, event: ClickEvent) {
    let event = match state.click_sender.try_send(event) {
        Ok(()) => return,
        Err(TrySendError::Full(event)) => {
            warn!(code = %event.code, "Click queue full, recording click inline");
            event
        }
        Err(TrySendError::Closed(event)) => {
            warn!(code = %event.code, "Click queue closed, recording click inline");
            event
        }
    };

    let shortener = state.shortener.clone();
    tokio::spawn(async move {
        record_with_retry(&shortener, &event.code).await;
    });
}
