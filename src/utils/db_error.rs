/// Returns `true` if `e` is a UNIQUE violation on `urls.long_url`.
///
/// SQLite does not report constraint names, so the column is matched in the
/// driver message (`UNIQUE constraint failed: urls.long_url`).
pub fn is_unique_violation_on_long_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.message().contains("urls.long_url")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_violation() {
        assert!(!is_unique_violation_on_long_url(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation_on_long_url(&sqlx::Error::PoolTimedOut));
    }

    async fn memory_pool() -> sqlx::SqlitePool {
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        crate::infrastructure::persistence::MIGRATOR
            .run(&pool)
            .await
            .unwrap();
        pool
    }

    async fn insert_returning_id(
        pool: &sqlx::SqlitePool,
        long_url: &str,
        code: Option<&str>,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("INSERT INTO urls (long_url, code) VALUES (?, ?) RETURNING id")
            .bind(long_url)
            .bind(code)
            .fetch_one(pool)
            .await
    }

    #[tokio::test]
    async fn test_duplicate_long_url_is_violation() {
        let pool = memory_pool().await;

        insert_returning_id(&pool, "http://a.com", None).await.unwrap();
        let err = insert_returning_id(&pool, "http://a.com", None)
            .await
            .unwrap_err();

        assert!(is_unique_violation_on_long_url(&err));
    }

    #[tokio::test]
    async fn test_duplicate_code_is_not_long_url_violation() {
        let pool = memory_pool().await;

        insert_returning_id(&pool, "http://a.com", Some("1")).await.unwrap();
        let err = insert_returning_id(&pool, "http://b.com", Some("1"))
            .await
            .unwrap_err();

        assert!(err.as_database_error().unwrap().is_unique_violation());
        assert!(!is_unique_violation_on_long_url(&err));
    }
}
