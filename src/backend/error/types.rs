/**
 * Backend Error Types
 *
 * This module defines the error taxonomy used by every HTTP handler.
 *
 * # Error Categories
 *
 * - `Validation` - missing or malformed input (400)
 * - `Unauthorized` - missing/invalid/expired token or bad password (401)
 * - `NotFound` - missing user or scores (404)
 * - `Conflict` - duplicate email on registration (409)
 * - `Internal` - store or crypto failure (500)
 *
 * Internal errors carry only a client-safe message. The underlying cause is
 * logged where the error is created and never leaves the process.
 */

use std::fmt::Display;

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use scoreboard::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::not_found("No scores found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input error (from the shared module)
    #[error(transparent)]
    Validation(#[from] SharedError),

    /// Authentication failed
    #[error("Unauthorized: {message}")]
    Unauthorized {
        /// Human-readable error message
        message: String,
    },

    /// Requested resource does not exist
    #[error("Not found: {message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Resource already exists
    #[error("Conflict: {message}")]
    Conflict {
        /// Human-readable error message
        message: String,
    },

    /// Store or crypto failure
    ///
    /// `message` is what the client sees; the cause has already been logged.
    #[error("Internal error: {message}")]
    Internal {
        /// Client-safe error message
        message: String,
    },
}

impl BackendError {
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create an internal error, logging `cause` at error level
    ///
    /// # Arguments
    ///
    /// * `message` - Client-safe description, e.g. "Error saving score"
    /// * `cause` - The underlying failure; logged, never returned
    pub fn internal(message: impl Into<String>, cause: impl Display) -> Self {
        let message = message.into();
        tracing::error!(error = %cause, "{}", message);
        Self::Internal { message }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::Validation(err) => err.client_message().to_string(),
            Self::Unauthorized { message }
            | Self::NotFound { message }
            | Self::Conflict { message }
            | Self::Internal { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        let validation: BackendError = SharedError::validation("score", "Invalid score value").into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            BackendError::unauthorized("Invalid password").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::not_found("Email not found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::conflict("exists").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            BackendError::internal("Error saving score", "connection reset").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_hides_cause() {
        let error = BackendError::internal("Error creating user", "password=hunter2");
        assert_eq!(error.message(), "Error creating user");
        assert!(!error.to_string().contains("hunter2"));
    }

    #[test]
    fn test_validation_message() {
        let error: BackendError = SharedError::validation("email", "Invalid email format").into();
        assert_eq!(error.message(), "Invalid email format");
    }
}
