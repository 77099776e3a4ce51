//! Shared Error Types
//!
//! Errors that can be produced without any server machinery: request bodies
//! that fail to parse and fields that fail validation. The backend maps every
//! variant onto `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use scoreboard::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Email must contain '@'");
//! assert_eq!(error.client_message(), "Email must contain '@'");
//! ```
use thiserror::Error;

/// Input errors that can occur before a request reaches any store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// The request body was not the JSON shape the endpoint expects
    #[error("Malformed request body: {message}")]
    MalformedBody {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new malformed-body error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedBody {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Message that is safe to show to the caller
    pub fn client_message(&self) -> &str {
        match self {
            Self::MalformedBody { message } => message,
            Self::ValidationError { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("JSON error: {}", err))
    }
}
