//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};

use crate::state::AppState;

/// Template for the landing page.
///
/// Renders `templates/index.html` with:
/// - URL input form with optional custom code
/// - Base URL used to display results
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub base_url: String,
    pub version: &'static str,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    IndexTemplate {
        base_url: state.base_url,
        version: env!("CARGO_PKG_VERSION"),
    }
}
