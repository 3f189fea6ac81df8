//! Short code assignment and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::base62;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;

/// Service that maps long URLs to short codes and back.
///
/// Holds no state of its own; every call goes to the repository. Codes are a
/// pure function of the repository-allocated id, so two callers racing on the
/// same new URL compute the same code and the second write is a no-op.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    ///
    /// `base_url` is only used to build display URLs in [`Self::short_url`].
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
        }
    }

    /// Returns the code for `raw_url`, creating a record on first sight.
    ///
    /// # Flow
    ///
    /// 1. Trim and normalize the URL (prefix `http://` if no scheme)
    /// 2. Return the existing code if the record already has one
    /// 3. Otherwise insert-if-absent to get the id, encode it, assign the code
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrl`] if the URL is empty after trimming.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_or_create_code(&self, raw_url: &str) -> Result<String, AppError> {
        let long_url = normalize_url(raw_url).map_err(|e| {
            AppError::invalid_url(e.to_string(), json!({ "reason": "empty" }))
        })?;

        if let Some(UrlRecord {
            code: Some(code), ..
        }) = self.repository.find_by_url(&long_url).await?
        {
            return Ok(code);
        }

        let id = self.repository.insert_if_absent(&long_url).await?;
        let code = encode_id(id)?;
        self.repository.set_code(id, &code).await?;

        tracing::debug!(id, code = %code, long_url = %long_url, "Assigned short code");
        Ok(code)
    }

    /// Resolves a code to its long URL by exact match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        self.stats(code).await.map(|record| record.long_url)
    }

    /// Adds one click to the record with `code`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code; nothing is created.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn record_click(&self, code: &str) -> Result<(), AppError> {
        if self.repository.increment_clicks(code).await? {
            Ok(())
        } else {
            Err(code_not_found(code))
        }
    }

    /// Returns the full record, including its click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| code_not_found(code))
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Lists the most clicked records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError> {
        self.repository.list_most_clicked(limit).await
    }

    /// Prefix used for display URLs, as configured.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the display URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

fn encode_id(id: i64) -> Result<String, AppError> {
    match u64::try_from(id) {
        Ok(n) if n > 0 => Ok(base62::encode(n)),
        _ => Err(AppError::storage(
            "Store returned an invalid id",
            json!({ "id": id }),
        )),
    }
}

fn code_not_found(code: &str) -> AppError {
    AppError::not_found("Short code not found", json!({ "code": code }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    const BASE_URL: &str = "http://127.0.0.1:8000";

    fn create_test_record(id: i64, url: &str, code: Option<&str>, clicks: i64) -> UrlRecord {
        UrlRecord::new(
            id,
            url.to_string(),
            code.map(str::to_string),
            Utc::now(),
            clicks,
        )
    }

    fn service(repo: MockUrlRepository) -> ShortenerService<MockUrlRepository> {
        ShortenerService::new(Arc::new(repo), BASE_URL)
    }

    #[tokio::test]
    async fn test_get_or_create_code_new_url() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_url()
            .withf(|url| url == "http://a.com")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert_if_absent()
            .withf(|url| url == "http://a.com")
            .times(1)
            .returning(|_| Ok(1));

        mock_repo
            .expect_set_code()
            .withf(|id, code| *id == 1 && code == "1")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(mock_repo).get_or_create_code("http://a.com").await;

        assert_eq!(result.unwrap(), "1");
    }

    #[tokio::test]
    async fn test_get_or_create_code_existing_code_skips_writes() {
        let mut mock_repo = MockUrlRepository::new();

        let existing = create_test_record(5, "http://example.com", Some("5"), 3);
        mock_repo
            .expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));

        mock_repo.expect_insert_if_absent().times(0);
        mock_repo.expect_set_code().times(0);

        let result = service(mock_repo).get_or_create_code("example.com").await;

        assert_eq!(result.unwrap(), "5");
    }

    #[tokio::test]
    async fn test_get_or_create_code_pending_code_completes_assignment() {
        let mut mock_repo = MockUrlRepository::new();

        let pending = create_test_record(62, "http://example.com", None, 0);
        mock_repo
            .expect_find_by_url()
            .times(1)
            .returning(move |_| Ok(Some(pending.clone())));

        mock_repo
            .expect_insert_if_absent()
            .times(1)
            .returning(|_| Ok(62));

        mock_repo
            .expect_set_code()
            .withf(|id, code| *id == 62 && code == "10")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(mock_repo)
            .get_or_create_code("http://example.com")
            .await;

        assert_eq!(result.unwrap(), "10");
    }

    #[tokio::test]
    async fn test_get_or_create_code_normalizes_url() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_url()
            .withf(|url| url == "http://example.com/path")
            .times(1)
            .returning(|_| Ok(None));

        mock_repo
            .expect_insert_if_absent()
            .withf(|url| url == "http://example.com/path")
            .times(1)
            .returning(|_| Ok(61));

        mock_repo
            .expect_set_code()
            .withf(|_, code| code == "Z")
            .times(1)
            .returning(|_, _| Ok(()));

        let result = service(mock_repo)
            .get_or_create_code("   example.com/path  ")
            .await;

        assert_eq!(result.unwrap(), "Z");
    }

    #[tokio::test]
    async fn test_get_or_create_code_empty_url() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_find_by_url().times(0);
        mock_repo.expect_insert_if_absent().times(0);

        let service = service(mock_repo);

        for input in ["", "   ", "\t\n"] {
            let result = service.get_or_create_code(input).await;
            assert!(matches!(result.unwrap_err(), AppError::InvalidUrl { .. }));
        }
    }

    #[tokio::test]
    async fn test_get_or_create_code_rejects_non_positive_id() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo.expect_find_by_url().returning(|_| Ok(None));
        mock_repo.expect_insert_if_absent().returning(|_| Ok(0));
        mock_repo.expect_set_code().times(0);

        let result = service(mock_repo).get_or_create_code("a.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_get_or_create_code_propagates_storage_error() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_url()
            .returning(|_| Err(AppError::storage("Database error", json!({}))));
        mock_repo.expect_insert_if_absent().times(0);

        let result = service(mock_repo).get_or_create_code("a.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockUrlRepository::new();

        let record = create_test_record(2, "https://rust-lang.org", Some("2"), 0);
        mock_repo
            .expect_find_by_code()
            .with(eq("2"))
            .times(1)
            .returning(move |_| Ok(Some(record.clone())));

        let result = service(mock_repo).resolve("2").await;

        assert_eq!(result.unwrap(), "https://rust-lang.org");
    }

    #[tokio::test]
    async fn test_resolve_not_found() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_find_by_code()
            .with(eq("doesnotexist"))
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).resolve("doesnotexist").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_click_success() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_clicks()
            .with(eq("abc"))
            .times(1)
            .returning(|_| Ok(true));

        assert!(service(mock_repo).record_click("abc").await.is_ok());
    }

    #[tokio::test]
    async fn test_record_click_unknown_code() {
        let mut mock_repo = MockUrlRepository::new();

        mock_repo
            .expect_increment_clicks()
            .times(1)
            .returning(|_| Ok(false));
        mock_repo.expect_insert_if_absent().times(0);

        let result = service(mock_repo).record_click("nope").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[test]
    fn test_short_url() {
        let service = ShortenerService::new(Arc::new(MockUrlRepository::new()), "https://s.io/");
        assert_eq!(service.short_url("abc"), "https://s.io/abc");

        let service = ShortenerService::new(Arc::new(MockUrlRepository::new()), BASE_URL);
        assert_eq!(service.short_url("1"), "http://127.0.0.1:8000/1");
    }
}
