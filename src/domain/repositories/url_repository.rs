//! Repository trait for URL record storage.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, uniquely keyed storage for [`UrlRecord`]s.
///
/// The repository owns id allocation. Each write operation is atomic on its
/// own; the engine composes them without any lock of its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a record for `long_url` unless one exists, returning its id.
    ///
    /// Concurrent callers with the same URL all receive the same id and at
    /// most one row is created. A uniqueness race is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert_if_absent(&self, long_url: &str) -> Result<i64, AppError>;

    /// Assigns `code` to the record with `id`.
    ///
    /// Setting the code a record already has is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Storage`] if the record already holds a different
    /// code, or on database errors.
    async fn set_code(&self, id: i64, code: &str) -> Result<(), AppError>;

    /// Finds a record by its exact normalized URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_url(&self, long_url: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its exact short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Atomically adds one to the click counter of the record with `code`.
    ///
    /// Returns `Ok(true)` if a record matched, `Ok(false)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_clicks(&self, code: &str) -> Result<bool, AppError>;

    /// Counts all records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Lists records with an assigned code, most clicked first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_most_clicked(&self, limit: i64) -> Result<Vec<UrlRecord>, AppError>;
}
