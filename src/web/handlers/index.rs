//! Form page for creating short links from a browser.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

/// Template for the shortening form.
///
/// Renders `templates/index.html`. `created` holds the full short URL after
/// a successful submission, `error` the rejection message after a failed one.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub base_url: String,
    pub long_url: String,
    pub created: Option<String>,
    pub error: Option<String>,
}

impl IndexTemplate {
    fn empty(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            long_url: String::new(),
            created: None,
            error: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    #[serde(default)]
    pub long_url: String,
}

/// Renders the empty form.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate::empty(state.shortener.base_url())
}

/// Handles a form submission and re-renders the page.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Errors
///
/// An empty URL re-renders the page with the message and status 400.
/// Storage failures are returned as the JSON error response.
pub async fn shorten_form_handler(
    State(state): State<AppState>,
    Form(form): Form<ShortenForm>,
) -> Result<Response, AppError> {
    let mut page = IndexTemplate::empty(state.shortener.base_url());

    match state.shortener.get_or_create_code(&form.long_url).await {
        Ok(code) => {
            page.created = Some(state.shortener.short_url(&code));
            Ok(page.into_response())
        }
        Err(AppError::InvalidUrl { message, .. }) => {
            page.long_url = form.long_url;
            page.error = Some(message);
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
        Err(e) => Err(e),
    }
}
