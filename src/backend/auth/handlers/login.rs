/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up user by email
 * 2. Verify password using bcrypt
 * 3. Issue a session token with the user's id and email
 * 4. Return the email and token
 *
 * An unknown email is 404 and a wrong password is 401. A store failure
 * during lookup is 500; it is not reported as an unknown email.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{CredentialsRequest, LoginResponse, LoginUser};

const LOGIN_FAILED: &str = "Error logging in";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body
/// * `404 Not Found` - No user with this email
/// * `401 Unauthorized` - Password does not match
/// * `500 Internal Server Error` - Store, hashing or token failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "user": {
///     "email": "user@example.com",
///     "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
///   }
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let email = request.email.trim();
    tracing::info!("Login request for: {}", email);

    let user = state
        .credentials
        .find_by_email(email)
        .await
        .map_err(|e| BackendError::internal(LOGIN_FAILED, e))?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", email);
            BackendError::not_found("Email not found")
        })?;

    let valid = state
        .hasher
        .verify_blocking(request.password, user.password_hash.clone())
        .await
        .map_err(|e| BackendError::internal(LOGIN_FAILED, e))?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::unauthorized("Invalid password"));
    }

    let token = state
        .tokens
        .issue(&user.id.to_string(), &user.email)
        .map_err(|e| BackendError::internal(LOGIN_FAILED, e))?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: LoginUser {
            email: user.email,
            token,
        },
    }))
}
