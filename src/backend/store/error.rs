//! Store error type

use thiserror::Error;

/// Failure reported by a credential or score store
///
/// A missing record is not an error; lookups return `Ok(None)` for that.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Query or connection failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failed at startup
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store cannot serve requests at all
    #[error("Store unavailable: {message}")]
    Unavailable {
        /// Human-readable error message
        message: String,
    },
}

impl StoreError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}
