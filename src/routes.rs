//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`             - Landing page
//! - `GET  /{code}`       - Short link redirect
//! - `POST /api/shorten`  - Create a short link
//! - `GET  /api/health`   - Health check
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Headers** - Version and CORS response headers
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{headers, tracing};
use crate::state::AppState;
use crate::web::handlers::index_handler;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the router with all routes and middleware, without path
/// normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn_with_state(state.clone(), headers::layer))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with trailing slashes trimmed before
/// routing, so `/abc123/` resolves like `/abc123`.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
