mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use seqshort::api::handlers::stats_handler;

#[tokio::test]
async fn test_stats_success() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(pool.clone());
    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    common::create_test_url(&pool, "https://example.com", "1").await;
    sqlx::query("UPDATE urls SET clicks = 7 WHERE code = '1'")
        .execute(&pool)
        .await
        .unwrap();

    let response = server.get("/api/stats/1").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["code"], "1");
    assert_eq!(json["long_url"], "https://example.com");
    assert_eq!(json["short_url"], "http://s.test/1");
    assert_eq!(json["clicks"], 7);
    assert!(json["created_at"].is_string());
}

#[tokio::test]
async fn test_stats_not_found() {
    let pool = common::test_pool().await;
    let (state, _rx) = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/stats/{code}", get(stats_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/api/stats/zzz").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
}
