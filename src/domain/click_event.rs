//! Click event model for asynchronous click tracking.

/// A successful redirect waiting to be counted.
///
/// Created by the redirect handler after the code resolved and consumed by
/// [`crate::domain::click_worker::run_click_worker`], which keeps the counter
/// update off the redirect's response path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for `code`.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
