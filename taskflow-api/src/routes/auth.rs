/// Authentication endpoints
///
/// # Endpoints
///
/// - `POST /api/register` - Register a new user
/// - `POST /api/login` - Login and get a token
///
/// Tokens are stateless and self-contained with a 24-hour expiry; there is
/// no server-side session and no logout endpoint. A logged-out client just
/// discards its copy of the token.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskflow_shared::{
    auth::{jwt, password},
    models::user::{CreateUser, User},
};
use validator::Validate;

/// Register request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Email address
    #[serde(default)]
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password (stored as an Argon2id hash, never in plaintext)
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request
///
/// The email is not format-validated here: an unknown address must produce
/// the same `InvalidCredentials` response as a wrong password.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[serde(default)]
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    /// Password
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Response for both register and login
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Bearer token embedding the user's id and email
    pub token: String,

    /// User id
    #[serde(rename = "userId")]
    pub user_id: i64,
}

/// Register a new user
///
/// Hashes the password, inserts the user, and issues a signed token.
///
/// # Endpoint
///
/// ```text
/// POST /api/register
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed or email already exists
/// - `500 Internal Server Error`: Server error
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()?;

    let password_hash = password::hash_password(&req.password)?;

    // The unique constraint on users.email surfaces as DuplicateEmail
    let user = User::create(
        &state.db,
        CreateUser {
            email: req.email,
            password_hash,
        },
    )
    .await?;

    let claims = jwt::Claims::new(user.id, user.email.clone());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(AuthResponse {
        token,
        user_id: user.id,
    }))
}

/// Login endpoint
///
/// Authenticates a user and returns a token.
///
/// # Endpoint
///
/// ```text
/// POST /api/login
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Validation failed, or invalid credentials — the
///   response is identical whether the email is unknown or the password is
///   wrong
/// - `500 Internal Server Error`: Server error
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    req.validate()?;

    let user = User::find_by_email(&state.db, &req.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = password::verify_password(&req.password, &user.password_hash)?;
    if !valid {
        return Err(ApiError::InvalidCredentials);
    }

    let claims = jwt::Claims::new(user.id, user.email.clone());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(AuthResponse {
        token,
        user_id: user.id,
    }))
}
