/// Bearer authentication for the HTTP layer
///
/// This module extracts and validates bearer tokens from request headers and
/// produces the authenticated identity that handlers operate on.
///
/// # Error Semantics
///
/// The two failure modes are distinguished so the transport layer can map
/// them to different status codes:
///
/// - [`AuthError::MissingToken`]: no bearer token on the request → 401
/// - [`AuthError::InvalidToken`]: signature/expiry/issuer failure → 403
///
/// # Example
///
/// ```
/// use axum::http::{header, HeaderMap, HeaderValue};
/// use taskflow_shared::auth::jwt::{create_token, Claims};
/// use taskflow_shared::auth::middleware::authenticate;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let secret = "test-secret-key-at-least-32-bytes-long";
/// let token = create_token(&Claims::new(42, "user@example.com"), secret)?;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(
///     header::AUTHORIZATION,
///     HeaderValue::from_str(&format!("Bearer {}", token))?,
/// );
///
/// let user = authenticate(&headers, secret)?;
/// assert_eq!(user.user_id, 42);
/// # Ok(())
/// # }
/// ```

use axum::http::{header, HeaderMap};
use serde::{Deserialize, Serialize};

use super::jwt::{self, Claims};

/// Error type for bearer authentication
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No bearer token present on the request
    #[error("Missing bearer token")]
    MissingToken,

    /// Token failed signature, expiry, or issuer validation
    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// Authenticated identity added to request extensions
///
/// Handlers extract this with Axum's `Extension` extractor after the
/// authentication middleware has run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    /// Authenticated user id
    pub user_id: i64,

    /// The user's email address (from the token)
    pub email: String,
}

impl AuthUser {
    /// Creates the authenticated identity from validated claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

/// Extracts and validates the bearer token from request headers
///
/// A missing Authorization header, a non-UTF-8 value, or a scheme other than
/// `Bearer` all count as "no token present".
pub fn authenticate(headers: &HeaderMap, secret: &str) -> Result<AuthUser, AuthError> {
    let header_value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header_value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    let claims =
        jwt::validate_token(token, secret).map_err(|e| AuthError::InvalidToken(e.to_string()))?;

    Ok(AuthUser::from_claims(claims))
}
