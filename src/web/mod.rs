//! Browser UI: a single form page rendered with Askama.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Route configuration

pub mod handlers;
pub mod routes;
