//! HTML template rendering handlers.

mod index;

pub use index::{IndexTemplate, ShortenForm, index_handler, shorten_form_handler};
