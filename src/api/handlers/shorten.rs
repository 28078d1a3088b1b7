//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use tracing::{error, info};
use url::Url;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com",
///   "custom_code": "my-link"   // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "short_code": "my-link",
///   "short_url": "https://flipr.sh/my-link",
///   "original_url": "https://example.com/"
/// }
/// ```
///
/// The URL is stored in its normalized, percent-encoded form so it is always
/// usable as a `Location` header.
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON for the request shape,
///   or `url` is not an absolute URL
/// - 422 Unprocessable Entity if the custom code is malformed, blocked or taken
/// - 500 Internal Server Error if no code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.inspect_err(|rejection| {
        error!(event = "shortening_error", error = %rejection, "API shorten error");
    })?;

    info!(
        event = "shortening_try",
        original_url = %payload.url,
        custom_code = ?payload.custom_code,
        "URL shortening request"
    );

    let result = payload
        .validate()
        .map_err(AppError::from)
        .and_then(|_| normalize_url(&payload.url))
        .and_then(|url| {
            state
                .shortener
                .shorten(url.as_str(), payload.custom_code.as_deref())
                .map_err(AppError::from)
        });

    match result {
        Ok(record) => {
            info!(
                event = "shortening_success",
                short_code = %record.code,
                "URL shortened successfully"
            );

            Ok(Json(ShortenResponse {
                short_url: record.short_url(&state.base_url),
                short_code: record.code,
                original_url: record.url,
            }))
        }
        Err(err) => {
            error!(event = "shortening_error", error = %err, "API shorten error");
            Err(err)
        }
    }
}

/// Parses `raw` into its serialized form. Tabs and newlines are dropped and
/// non-ASCII characters are percent-encoded.
fn normalize_url(raw: &str) -> Result<Url, AppError> {
    Url::parse(raw).map_err(|err| {
        AppError::bad_request(
            "Invalid request",
            json!({ "fields": ["url"], "reason": err.to_string() }),
        )
    })
}

/// Answers CORS preflight requests for the shorten endpoint.
///
/// The CORS headers themselves are added by
/// [`crate::api::middleware::headers::layer`].
pub async fn preflight_handler() -> StatusCode {
    StatusCode::NO_CONTENT
}
