//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be an absolute URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional custom short code. Admissibility is decided by the shortener,
    /// so no format rules are applied here.
    pub custom_code: Option<String>,
}

/// Response for a successfully shortened URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
}
