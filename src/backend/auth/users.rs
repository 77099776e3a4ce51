/**
 * User Model and Credential Store
 *
 * A user is created once on registration and never updated afterwards.
 * The store is keyed by email.
 */

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::backend::store::StoreError;

/// User struct representing a stored credential
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Store identifier; becomes the `userId` token claim
    pub id: uuid::Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a fresh identifier
    pub fn new(email: impl Into<String>, password_hash: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            email: email.into(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Storage for user credentials
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Get user by email
    ///
    /// Returns `Ok(None)` if no user has this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert the user unless the email is already taken
    ///
    /// The check and the insert are a single store operation. Returns
    /// `false` when another user already owns the email.
    async fn insert_if_absent(&self, user: &User) -> Result<bool, StoreError>;
}
