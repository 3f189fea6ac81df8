//! Shared application state injected into every handler.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::ShortenerService;
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::SqliteUrlRepository;

#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<SqliteUrlRepository>>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService<SqliteUrlRepository>>,
        click_sender: mpsc::Sender<ClickEvent>,
    ) -> Self {
        Self {
            shortener,
            click_sender,
        }
    }
}
