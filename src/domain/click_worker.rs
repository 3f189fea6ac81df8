//! Background worker that applies queued clicks to the store.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::application::services::ShortenerService;
use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

const MAX_RETRIES: usize = 3;

/// Drains `rx` until every sender is dropped, counting one click per event.
///
/// Storage errors are retried with jittered exponential backoff; a code that
/// no longer resolves is logged and skipped.
pub async fn run_click_worker<R>(
    mut rx: mpsc::Receiver<ClickEvent>,
    service: Arc<ShortenerService<R>>,
) where
    R: UrlRepository + 'static,
{
    while let Some(ev) = rx.recv().await {
        record_with_retry(&service, &ev.code).await;
    }

    tracing::info!("Click worker stopped");
}

/// Records one click, retrying transient storage failures.
pub async fn record_with_retry<R: UrlRepository>(service: &ShortenerService<R>, code: &str) {
    let strategy = ExponentialBackoff::from_millis(10)
        .map(jitter)
        .take(MAX_RETRIES);

    let result = RetryIf::start(
        strategy,
        || service.record_click(code),
        |e: &AppError| e.is_retryable(),
    )
    .await;

    match result {
        Ok(()) => tracing::debug!(code, "Click recorded"),
        Err(AppError::NotFound { .. }) => tracing::warn!(code, "Click for unknown code dropped"),
        Err(e) => tracing::error!(code, error = %e, "Failed to record click"),
    }
}
