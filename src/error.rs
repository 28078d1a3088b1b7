//! HTTP-facing error type.
//!
//! [`AppError`] is the single place where failures are translated into
//! status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::error::ShortenerError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    Unprocessable { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn unprocessable(message: impl Into<String>, details: Value) -> Self {
        Self::Unprocessable {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Unprocessable { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::Unprocessable { message, details } => {
                ("code_restricted", message, details)
            }
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ShortenerError> for AppError {
    fn from(err: ShortenerError) -> Self {
        let message = err.to_string();

        match err {
            ShortenerError::CodeRestricted { code } => {
                AppError::unprocessable(message, json!({ "code": code }))
            }
            ShortenerError::GenerationExhausted { attempts } => {
                AppError::internal(message, json!({ "attempts": attempts }))
            }
            ShortenerError::RetrievalFailed { code } => {
                AppError::internal(message, json!({ "code": code }))
            }
            ShortenerError::CodeNotFound { code } => {
                AppError::not_found(message, json!({ "code": code }))
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort();

        AppError::bad_request("Invalid request", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortener_error_status_mapping() {
        let cases = [
            (
                ShortenerError::CodeRestricted {
                    code: "ab".to_string(),
                },
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ShortenerError::GenerationExhausted { attempts: 10 },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ShortenerError::RetrievalFailed {
                    code: "abc".to_string(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ShortenerError::CodeNotFound {
                    code: "abc".to_string(),
                },
                StatusCode::NOT_FOUND,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn test_error_info_keeps_message_and_details() {
        let err = AppError::from(ShortenerError::CodeRestricted {
            code: "admin".to_string(),
        });
        let info = err.to_error_info();

        assert_eq!(info.code, "code_restricted");
        assert_eq!(info.message, "Custom code is restricted");
        assert_eq!(info.details["code"], "admin");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("Short code not found", json!({})).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
