//! Failure kinds raised by the shortener.

use thiserror::Error;

/// Errors returned by [`crate::application::services::Shortener`].
///
/// Raised at the point of detection and passed through unchanged; only the
/// HTTP boundary translates them (see [`crate::error::AppError`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortenerError {
    /// Custom code is malformed, block-listed, or already bound.
    #[error("Custom code is restricted")]
    CodeRestricted { code: String },

    /// No admissible, unused code was found within the retry budget.
    #[error("Failed to generate a unique short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// A freshly inserted record could not be read back.
    #[error("Failed to retrieve the shortened URL")]
    RetrievalFailed { code: String },

    #[error("Short code not found")]
    CodeNotFound { code: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ShortenerError::GenerationExhausted { attempts: 10 };
        assert!(err.to_string().contains("10 attempts"));

        let err = ShortenerError::CodeNotFound {
            code: "nope".to_string(),
        };
        assert_eq!(err.to_string(), "Short code not found");
    }
}
