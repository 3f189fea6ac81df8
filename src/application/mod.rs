//! Application layer services implementing business logic.
//!
//! Services consume repository traits and expose the operations HTTP handlers
//! and the CLI call.
//!
//! # Available Services
//!
//! - [`services::shortener_service::ShortenerService`] - Get-or-create, resolve, click recording

pub mod services;
