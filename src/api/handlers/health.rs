//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service health status.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2025-01-01T12:00:00Z",
///   "version": "0.1.0",
///   "links": 42
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        links: state.shortener.len(),
    })
}
