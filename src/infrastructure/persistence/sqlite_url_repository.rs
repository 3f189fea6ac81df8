//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_long_url;

#[derive(sqlx::FromRow)]
struct UrlRow {
    id: i64,
    long_url: String,
    code: Option<String>,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(r: UrlRow) -> Self {
        UrlRecord::new(r.id, r.long_url, r.code, r.created_at, r.clicks)
    }
}

/// SQLite repository for URL records.
///
/// Id allocation relies on `INTEGER PRIMARY KEY AUTOINCREMENT`; uniqueness of
/// `long_url` and `code` is enforced by the schema. Every operation is a single
/// statement, or a statement plus a read of a row that can no longer change.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    async fn find_id_by_url(&self, long_url: &str) -> Result<Option<i64>, AppError> {
        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM urls WHERE long_url = ?")
            .bind(long_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(id)
    }

    /// Inserts `long_url`, or returns the id of the row a concurrent insert
    /// created first.
    async fn insert_or_lookup(&self, long_url: &str) -> Result<i64, AppError> {
        let inserted = sqlx::query_scalar::<_, i64>(
            "INSERT INTO urls (long_url) VALUES (?) RETURNING id",
        )
        .bind(long_url)
        .fetch_one(self.pool.as_ref())
        .await;

        match inserted {
            Ok(id) => {
                tracing::debug!(id, long_url, "Inserted URL record");
                Ok(id)
            }
            // Lost the race to a concurrent insert; its row is now visible.
            Err(e) if is_unique_violation_on_long_url(&e) => {
                tracing::debug!(long_url, "Concurrent insert detected, reading existing id");
                self.find_id_by_url(long_url).await?.ok_or_else(|| {
                    AppError::storage(
                        "URL record vanished after uniqueness violation",
                        json!({ "long_url": long_url }),
                    )
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert_if_absent(&self, long_url: &str) -> Result<i64, AppError> {
        if let Some(id) = self.find_id_by_url(long_url).await? {
            return Ok(id);
        }

        self.insert_or_lookup(long_url).await
    }

    async fn set_code(&self, id: i64, code: &str) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE urls SET code = ?1 WHERE id = ?2 AND (code IS NULL OR code = ?1)",
        )
        .bind(code)
        .bind(id)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() > 0 {
            return Ok(());
        }

        let current = sqlx::query_scalar::<_, Option<String>>("SELECT code FROM urls WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        match current {
            None => Err(AppError::not_found(
                "URL record not found",
                json!({ "id": id }),
            )),
            Some(existing) => {
                tracing::error!(id, code, existing = ?existing, "Refusing to overwrite short code");
                Err(AppError::storage(
                    "Record already has a different code",
                    json!({ "id": id }),
                ))
            }
        }
    }

    async fn find_by_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, code, created_at, clicks
            FROM urls
            WHERE long_url = ?
            "#,
        )
        .bind(long_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, code, created_at, clicks
            FROM urls
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE urls SET clicks = clicks + 1 WHERE code = ?")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn list_most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, long_url, code, created_at, clicks
            FROM urls
            WHERE code IS NOT NULL
            ORDER BY clicks DESC, id ASC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }
}
