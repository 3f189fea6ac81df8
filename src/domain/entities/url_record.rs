//! URL record entity: the mapping between a normalized long URL and its code.

use chrono::{DateTime, Utc};

/// A stored URL mapping with its click counter.
///
/// `code` is `None` only between id allocation and code assignment inside
/// get-or-create. Lookups by code never observe that state because they match
/// on the code itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub long_url: String,
    pub code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(
        id: i64,
        long_url: String,
        code: Option<String>,
        created_at: DateTime<Utc>,
        clicks: i64,
    ) -> Self {
        Self {
            id,
            long_url,
            code,
            created_at,
            clicks,
        }
    }

    /// Returns true once the code has been assigned.
    pub fn has_code(&self) -> bool {
        self.code.is_some()
    }
}
