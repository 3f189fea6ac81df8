//! Core domain entities.
//!
//! - [`UrlRecord`] - A long URL, its short code and click counter

pub mod url_record;

pub use url_record::UrlRecord;
