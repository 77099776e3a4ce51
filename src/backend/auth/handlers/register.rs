/**
 * Register Handler
 *
 * Implements POST /register.
 *
 * # Registration Process
 *
 * 1. Validate the body (email contains '@', password 1..=71 bytes)
 * 2. Hash the password with bcrypt
 * 3. Reject with 409 if the email is already registered
 * 4. Insert the user with a conditional insert; a concurrent registration
 *    that wins the race also yields 409
 *
 * # Security
 *
 * - The password is never stored, logged or echoed
 * - Store failures return a fixed message; details go to the log only
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::users::User;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::{CredentialsRequest, RegisterResponse, RegisterResult};

const ALREADY_EXISTS: &str = "User with this email already exists";
const CREATE_FAILED: &str = "Error creating user";

/// Register handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, missing email/password, or bad email format
/// * `409 Conflict` - A user with this email already exists
/// * `500 Internal Server Error` - Hashing or store failure
///
/// # Example Response
///
/// ```json
/// {
///   "message": "User Created Successfully",
///   "result": { "insertedId": "123e4567-e89b-12d3-a456-426614174000" }
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    let email = request.email.trim().to_string();
    tracing::info!("Register request for: {}", email);

    let password_hash = state
        .hasher
        .hash_blocking(request.password)
        .await
        .map_err(|e| BackendError::internal(CREATE_FAILED, e))?;

    let existing = state
        .credentials
        .find_by_email(&email)
        .await
        .map_err(|e| BackendError::internal(CREATE_FAILED, e))?;

    if existing.is_some() {
        tracing::warn!("Email already exists: {}", email);
        return Err(BackendError::conflict(ALREADY_EXISTS));
    }

    let user = User::new(email, password_hash);
    let inserted = state
        .credentials
        .insert_if_absent(&user)
        .await
        .map_err(|e| BackendError::internal(CREATE_FAILED, e))?;

    if !inserted {
        tracing::warn!("Email registered concurrently: {}", user.email);
        return Err(BackendError::conflict(ALREADY_EXISTS));
    }

    tracing::info!("User created successfully: {} ({})", user.email, user.id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User Created Successfully".to_string(),
            result: RegisterResult {
                inserted_id: user.id.to_string(),
            },
        }),
    ))
}
