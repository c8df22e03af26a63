/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which automatically converts
/// to the appropriate status code.
///
/// # Status Mapping
///
/// One consistent convention for the whole API:
///
/// - Validation failures, duplicate email, bad credentials → 400
/// - Missing bearer token → 401
/// - Invalid/expired bearer token, ownership-chain miss on creation → 403
/// - Storage failures → 500 with a generic message (details stay in logs)
///
/// Ownership-chain misses on list/update/delete do NOT produce errors: they
/// surface as empty results or zero counts, so the existence of other users'
/// resources is never leaked.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Request validation failed (400)
    ValidationError(Vec<ValidationErrorDetail>),

    /// Email already registered (400)
    DuplicateEmail,

    /// Unknown email or wrong password (400)
    ///
    /// One variant for both causes: the response never reveals which check
    /// failed.
    InvalidCredentials,

    /// No bearer token on the request (401)
    MissingToken,

    /// Bearer token failed signature/expiry/issuer validation (403)
    InvalidToken(String),

    /// Ownership chain did not resolve to the caller (403)
    AccessDenied,

    /// Unexpected storage or internal failure (500)
    InternalError(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "validation_error", "access_denied")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::DuplicateEmail => write!(f, "Email already exists"),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::MissingToken => write!(f, "Missing bearer token"),
            ApiError::InvalidToken(msg) => write!(f, "Invalid token: {}", msg),
            ApiError::AccessDenied => write!(f, "Access denied"),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Status code this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationError(_) => StatusCode::BAD_REQUEST,
            ApiError::DuplicateEmail => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::BAD_REQUEST,
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken(_) => StatusCode::FORBIDDEN,
            ApiError::AccessDenied => StatusCode::FORBIDDEN,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let (error_code, message, details) = match self {
            ApiError::ValidationError(errors) => (
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::DuplicateEmail => {
                ("duplicate_email", "Email already exists".to_string(), None)
            }
            ApiError::InvalidCredentials => (
                "invalid_credentials",
                "Invalid credentials".to_string(),
                None,
            ),
            ApiError::MissingToken => ("missing_token", "Missing bearer token".to_string(), None),
            ApiError::InvalidToken(msg) => ("invalid_token", msg, None),
            ApiError::AccessDenied => ("access_denied", "Access denied".to_string(), None),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                ("internal_error", "Server error".to_string(), None)
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                if db_err.is_unique_violation() && db_err.message().contains("users.email") {
                    return ApiError::DuplicateEmail;
                }

                ApiError::InternalError(format!("Database error: {}", db_err))
            }
            _ => ApiError::InternalError(format!("Database error: {}", err)),
        }
    }
}

/// Convert bearer authentication errors to API errors
impl From<taskflow_shared::auth::middleware::AuthError> for ApiError {
    fn from(err: taskflow_shared::auth::middleware::AuthError) -> Self {
        match err {
            taskflow_shared::auth::middleware::AuthError::MissingToken => ApiError::MissingToken,
            taskflow_shared::auth::middleware::AuthError::InvalidToken(msg) => {
                ApiError::InvalidToken(msg)
            }
        }
    }
}

/// Convert password errors to API errors
impl From<taskflow_shared::auth::password::PasswordError> for ApiError {
    fn from(err: taskflow_shared::auth::password::PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}

/// Convert JWT errors to API errors
///
/// Handlers only hit this path when *creating* tokens; validation failures
/// are mapped through `AuthError` in the middleware instead.
impl From<taskflow_shared::auth::jwt::JwtError> for ApiError {
    fn from(err: taskflow_shared::auth::jwt::JwtError) -> Self {
        ApiError::InternalError(format!("Token operation failed: {}", err))
    }
}

/// Convert validator errors to API errors
impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<ValidationErrorDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| ValidationErrorDetail {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "Validation failed".to_string()),
                })
            })
            .collect();

        ApiError::ValidationError(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::DuplicateEmail;
        assert_eq!(err.to_string(), "Email already exists");

        let err = ApiError::AccessDenied;
        assert_eq!(err.to_string(), "Access denied");
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::ValidationError(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::DuplicateEmail.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MissingToken.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidToken("bad".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(ApiError::AccessDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::InternalError("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_error_display() {
        let errors = vec![
            ValidationErrorDetail {
                field: "email".to_string(),
                message: "Invalid email format".to_string(),
            },
            ValidationErrorDetail {
                field: "password".to_string(),
                message: "Password is required".to_string(),
            },
        ];

        let err = ApiError::ValidationError(errors);
        assert_eq!(err.to_string(), "Validation failed: 2 errors");
    }
}
