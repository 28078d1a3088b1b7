//! Missing short link page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

/// Template for unknown short codes.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub code: String,
}

/// Builds the 404 page for a short code that is not bound.
pub fn not_found_page(code: impl Into<String>) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate { code: code.into() })
}
