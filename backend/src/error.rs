//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to appropriate HTTP responses. User-facing message text
//! comes from a static code lookup so the client can show a friendly string
//! for every known failure, with a generic fallback for everything else.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Error response body
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    /// Display copy for the client, resolved from the static code table
    pub user_message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Stable machine codes used by the API
pub mod codes {
    pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const INVALID_CREDENTIALS: &str = "INVALID_CREDENTIALS";
    pub const FORBIDDEN: &str = "FORBIDDEN";
    pub const PREMIUM_REQUIRED: &str = "PREMIUM_REQUIRED";
    pub const CONFLICT: &str = "CONFLICT";
    pub const EMAIL_IN_USE: &str = "EMAIL_IN_USE";
    pub const WEAK_PASSWORD: &str = "WEAK_PASSWORD";
    pub const BAD_REQUEST: &str = "BAD_REQUEST";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
    pub const DATABASE_ERROR: &str = "DATABASE_ERROR";
}

/// Translate a machine code into display copy for the client.
///
/// Unmapped codes fall back to a generic message.
pub fn user_message(code: &str) -> &'static str {
    match code {
        codes::INVALID_CREDENTIALS => "Incorrect email or password. Please try again.",
        codes::EMAIL_IN_USE => {
            "An account with this email already exists. Please sign in or use a different email."
        }
        codes::WEAK_PASSWORD => {
            "Password is too weak. It must be at least 8 characters with uppercase, lowercase, number, and special character."
        }
        codes::UNAUTHORIZED => "You are not signed in. Please sign in and try again.",
        codes::FORBIDDEN => "You do not have permission to perform this action.",
        codes::PREMIUM_REQUIRED => "This content is available to premium members only.",
        codes::NOT_FOUND => "The requested resource was not found.",
        codes::CONFLICT => "This resource already exists.",
        codes::VALIDATION_ERROR => "Some of the submitted values are invalid. Please check and try again.",
        codes::BAD_REQUEST => "The request could not be understood. Please check and try again.",
        codes::DATABASE_ERROR => "The service is temporarily unavailable. Please try again later.",
        _ => "An unexpected error occurred. Please try again later.",
    }
}

impl ApiError {
    /// Unauthorized with the invalid-credentials code rather than the
    /// generic one, so the client can show the right copy.
    pub fn invalid_credentials() -> Self {
        ApiError::Unauthorized(codes::INVALID_CREDENTIALS.to_string())
    }

    /// Conflict carrying the email-in-use code.
    pub fn email_in_use() -> Self {
        ApiError::Conflict(codes::EMAIL_IN_USE.to_string())
    }

    /// Validation failure carrying the weak-password code.
    pub fn weak_password() -> Self {
        ApiError::Validation(codes::WEAK_PASSWORD.to_string())
    }

    fn code_and_status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(msg) if msg == codes::WEAK_PASSWORD => {
                (StatusCode::BAD_REQUEST, codes::WEAK_PASSWORD)
            }
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, codes::VALIDATION_ERROR),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, codes::NOT_FOUND),
            ApiError::Unauthorized(msg) if msg == codes::INVALID_CREDENTIALS => {
                (StatusCode::UNAUTHORIZED, codes::INVALID_CREDENTIALS)
            }
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, codes::UNAUTHORIZED),
            ApiError::Forbidden(msg) if msg == codes::PREMIUM_REQUIRED => {
                (StatusCode::FORBIDDEN, codes::PREMIUM_REQUIRED)
            }
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, codes::FORBIDDEN),
            ApiError::Conflict(msg) if msg == codes::EMAIL_IN_USE => {
                (StatusCode::CONFLICT, codes::EMAIL_IN_USE)
            }
            ApiError::Conflict(_) => (StatusCode::CONFLICT, codes::CONFLICT),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, codes::BAD_REQUEST),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, codes::INTERNAL_ERROR),
            ApiError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, codes::DATABASE_ERROR),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.code_and_status();

        let message = match &self {
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                "An internal error occurred".to_string()
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                "A database error occurred".to_string()
            }
            other => other.to_string(),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                user_message: user_message(code).to_string(),
                field: None,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_status() {
        let error = ApiError::Validation("Invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_status() {
        let error = ApiError::NotFound("User not found".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_credentials_status() {
        let error = ApiError::invalid_credentials();
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_known_codes_have_specific_copy() {
        let generic = user_message("SOMETHING_NEW");
        assert_ne!(user_message(codes::INVALID_CREDENTIALS), generic);
        assert_ne!(user_message(codes::EMAIL_IN_USE), generic);
        assert_ne!(user_message(codes::WEAK_PASSWORD), generic);
        assert_ne!(user_message(codes::PREMIUM_REQUIRED), generic);
    }

    #[test]
    fn test_unmapped_code_falls_back() {
        assert_eq!(
            user_message("TOTALLY_UNKNOWN"),
            "An unexpected error occurred. Please try again later."
        );
    }
}
