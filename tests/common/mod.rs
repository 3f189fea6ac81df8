#![allow(dead_code)]

use seqshort::application::services::ShortenerService;
use seqshort::domain::click_event::ClickEvent;
use seqshort::infrastructure::persistence::{MIGRATOR, SqliteUrlRepository};
use seqshort::state::AppState;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tokio::sync::mpsc;

pub const BASE_URL: &str = "http://s.test";

/// Fresh in-memory database with the real migrations applied.
///
/// A single connection that never expires keeps the in-memory database
/// alive for the whole test.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}

pub fn create_shortener(pool: SqlitePool) -> Arc<ShortenerService<SqliteUrlRepository>> {
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    Arc::new(ShortenerService::new(repository, BASE_URL))
}

pub fn create_test_state(pool: SqlitePool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    create_test_state_with_capacity(pool, 100)
}

pub fn create_test_state_with_capacity(
    pool: SqlitePool,
    capacity: usize,
) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(capacity);
    let state = AppState::new(create_shortener(pool), tx);
    (state, rx)
}

pub async fn create_test_url(pool: &SqlitePool, long_url: &str, code: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO urls (long_url, code) VALUES (?, ?) RETURNING id")
        .bind(long_url)
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn get_clicks(pool: &SqlitePool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE code = ?")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
