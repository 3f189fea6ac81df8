//! # seqshort
//!
//! A small URL shortener built with Axum and SQLite. Every distinct long URL
//! is stored once and receives a short code that is the base62 encoding of
//! its sequential row id, so codes are short, unique and never reused.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - URL record entity, repository trait, click events
//! - **Application Layer** ([`application`]) - The shortener engine
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite store and migrations
//! - **API Layer** ([`api`]) - JSON handlers, DTOs, and middleware
//! - **Web Layer** ([`web`]) - HTML form page
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urlshort.db"   # Optional
//! export BASE_URL="https://s.example.com"           # Optional
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortenerService;
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::SqliteUrlRepository;
    pub use crate::state::AppState;
}
