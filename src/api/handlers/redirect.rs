//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{error, info};

use crate::domain::error::ShortenerError;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found_page;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the original URL
/// - **404 Not Found** with an HTML page if the code is not bound
pub async fn redirect_handler(Path(code): Path<String>, State(state): State<AppState>) -> Response {
    info!(event = "redirect_try", short_code = %code, "Redirection request");

    match state.shortener.resolve(&code) {
        Ok(record) => {
            info!(
                event = "redirect_success",
                short_code = %code,
                destination_url = %record.url,
                "Redirection successful"
            );

            (StatusCode::FOUND, [(header::LOCATION, record.url)]).into_response()
        }
        Err(err) => {
            error!(event = "redirect_error", short_code = %code, error = %err, "Redirect error");

            match err {
                ShortenerError::CodeNotFound { code } => not_found_page(code).into_response(),
                other => AppError::from(other).into_response(),
            }
        }
    }
}
