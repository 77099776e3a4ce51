/**
 * Password Hashing
 *
 * One-way salted hashing with bcrypt. The salt is embedded in the output, so
 * hashing the same password twice gives different strings that both verify.
 *
 * bcrypt is CPU-bound; the `_blocking` variants move the work onto
 * `tokio::task::spawn_blocking` so request tasks keep making progress.
 *
 * Passwords over 71 bytes (bcrypt's 72-byte input includes a NUL
 * terminator) are rejected rather than truncated, so two passwords sharing
 * a long prefix never verify against each other's hash.
 *
 * Plaintext passwords are never logged here or by callers.
 */

use thiserror::Error;

/// Work factor used when none is configured
pub const DEFAULT_COST: u32 = 10;

/// Password hashing failure
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// bcrypt hasher with a fixed work factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_COST)
    }
}

impl PasswordHasher {
    /// Create a hasher; `cost` must be within bcrypt's 4..=31
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password
    ///
    /// Fails with `BcryptError::Truncation` for passwords over
    /// [`MAX_PASSWORD_BYTES`](crate::shared::MAX_PASSWORD_BYTES).
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        Ok(bcrypt::non_truncating_hash(plaintext, self.cost)?)
    }

    /// Check a plaintext password against a stored hash
    ///
    /// A malformed stored hash or an over-long password counts as a mismatch.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        match bcrypt::non_truncating_verify(plaintext, hashed) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Password could not be checked: {}", e);
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_blocking(&self, plaintext: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&plaintext)).await?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_blocking(
        &self,
        plaintext: String,
        hashed: String,
    ) -> Result<bool, PasswordError> {
        let hasher = *self;
        Ok(tokio::task::spawn_blocking(move || hasher.verify(&plaintext, &hashed)).await?)
    }
}
