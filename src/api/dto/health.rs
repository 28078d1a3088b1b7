//! DTOs for health check endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    /// Number of short codes currently bound.
    pub links: usize,
}
