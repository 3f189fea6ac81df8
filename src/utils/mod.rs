//! Utility functions for code encoding, URL processing, and database errors.
//!
//! - [`base62`] - Id to short code encoding
//! - [`url_normalizer`] - URL normalization
//! - [`db_error`] - Database constraint classification

pub mod base62;
pub mod db_error;
pub mod url_normalizer;
