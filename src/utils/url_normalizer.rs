//! URL normalization applied before a URL is stored or looked up.
//!
//! Normalization is deliberately textual: surrounding whitespace is trimmed and
//! `http://` is prepended when neither `http://` nor `https://` is present.
//! Nothing else about the URL is parsed or validated.

const DEFAULT_SCHEME: &str = "http://";

/// Errors that can occur during URL normalization.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL cannot be empty")]
    Empty,
}

/// Normalizes user input into the form used as the uniqueness key.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] if the input is empty after trimming.
///
/// # Examples
///
/// ```
/// use seqshort::utils::url_normalizer::normalize_url;
///
/// assert_eq!(normalize_url("  example.com ").unwrap(), "http://example.com");
/// assert_eq!(normalize_url("https://example.com").unwrap(), "https://example.com");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{DEFAULT_SCHEME}{trimmed}"))
    }
}
