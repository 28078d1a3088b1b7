//! API route configuration.

use crate::api::handlers::{health_handler, preflight_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes. None require authentication.
///
/// # Endpoints
///
/// - `POST    /shorten` - Create a short URL
/// - `OPTIONS /shorten` - CORS preflight
/// - `GET     /health`  - Liveness check
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler).options(preflight_handler))
        .route("/health", get(health_handler))
}
